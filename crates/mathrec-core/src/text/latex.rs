//! LaTeX stripping for problem statements

use regex::Regex;
use std::sync::OnceLock;

use super::dictionary::{LATEX_SYMBOLS, LATEX_WRAPPERS};

struct LatexPatterns {
    wrappers: Vec<Regex>,
    frac: Regex,
    sqrt: Regex,
    nth_root: Regex,
}

static PATTERNS: OnceLock<LatexPatterns> = OnceLock::new();

fn patterns() -> &'static LatexPatterns {
    PATTERNS.get_or_init(|| LatexPatterns {
        wrappers: LATEX_WRAPPERS
            .iter()
            .map(|cmd| {
                Regex::new(&format!(r"\\{}\{{([^}}]*)\}}", cmd)).expect("valid wrapper pattern")
            })
            .collect(),
        frac: Regex::new(r"\\frac\{([^}]*)\}\{([^}]*)\}").expect("valid frac pattern"),
        sqrt: Regex::new(r"\\sqrt\{([^}]*)\}").expect("valid sqrt pattern"),
        nth_root: Regex::new(r"\\sqrt\[([^\]]*)\]\{([^}]*)\}").expect("valid root pattern"),
    })
}

/// Strip LaTeX markup from text, keeping its readable content.
///
/// Wrapper commands keep their argument, `\frac{a}{b}` becomes `(a)/(b)`,
/// `\sqrt{a}` becomes `sqrt(a)` and `\sqrt[n]{a}` becomes `rootn(a)`.
/// Remaining braces and backslashes are dropped, symbol macros are replaced
/// by literals and whitespace is collapsed.
pub fn clean_latex(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let p = patterns();
    let mut cleaned = text.to_string();

    for wrapper in &p.wrappers {
        cleaned = wrapper.replace_all(&cleaned, "${1}").into_owned();
    }

    cleaned = p.frac.replace_all(&cleaned, "(${1})/(${2})").into_owned();
    cleaned = p.sqrt.replace_all(&cleaned, "sqrt(${1})").into_owned();
    cleaned = p.nth_root.replace_all(&cleaned, "root${1}(${2})").into_owned();

    cleaned.retain(|c| c != '{' && c != '}');

    for (macro_name, literal) in LATEX_SYMBOLS {
        if cleaned.contains(macro_name) {
            cleaned = cleaned.replace(macro_name, literal);
        }
    }

    cleaned.retain(|c| c != '\\');

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Built-in vocabulary tables for Polish mathematical text
//!
//! Tables are ordered slices so substitution order is stable. Extending the
//! vocabulary means adding a row here (or an alias in the engine config),
//! never touching normalizer control flow.

/// LaTeX wrapper commands whose braced argument is kept verbatim
pub const LATEX_WRAPPERS: &[&str] = &["text", "mathrm", "textbf", "textit"];

/// LaTeX symbol macros replaced by their literal equivalents.
/// Applied after braces are dropped and before stray backslashes are stripped.
pub const LATEX_SYMBOLS: &[(&str, &str)] = &[
    // Greek letters
    (r"\pi", "π"),
    (r"\alpha", "α"),
    (r"\beta", "β"),
    (r"\gamma", "γ"),
    (r"\delta", "δ"),
    (r"\theta", "θ"),
    (r"\lambda", "λ"),
    (r"\mu", "μ"),
    (r"\phi", "φ"),
    (r"\psi", "ψ"),
    (r"\omega", "ω"),
    // Trigonometric functions
    (r"\sin", "sin"),
    (r"\cos", "cos"),
    (r"\tan", "tan"),
    (r"\tg", "tg"),
    (r"\ctg", "ctg"),
    (r"\cot", "cot"),
];

/// Alias → canonical form for Polish math vocabulary.
/// Keys are matched as whole words against lowercased text.
pub const TERM_ALIASES: &[(&str, &str)] = &[
    // Angle units
    ("°", "stopnie"),
    ("stopni", "stopnie"),
    ("stopnia", "stopnie"),
    ("stopień", "stopnie"),
    ("rad", "radiany"),
    ("radian", "radiany"),
    ("radianów", "radiany"),
    ("radianie", "radiany"),
    // Greek letters
    ("π", "pi"),
    ("α", "alfa"),
    ("alpha", "alfa"),
    ("β", "beta"),
    ("γ", "gamma"),
    ("δ", "delta"),
    ("θ", "theta"),
    ("λ", "lambda"),
    ("μ", "mi"),
    ("φ", "phi"),
    ("ψ", "psi"),
    ("ω", "omega"),
    // Functions
    ("sin", "sinus"),
    ("cos", "cosinus"),
    ("tan", "tangens"),
    ("tg", "tangens"),
    ("ctg", "cotangens"),
    ("cot", "cotangens"),
    ("sec", "secans"),
    ("csc", "cosecans"),
    ("arcsin", "arcussinus"),
    ("arccos", "arcuscosinus"),
    ("arctan", "arcustangens"),
    ("arctg", "arcustangens"),
    // Command verbs
    ("oblicz", "oblicz"),
    ("wyraź", "wyraz"),
    ("wyrażenie", "wyrazenie"),
    ("upraw", "uprość"),
    ("uprość", "uprość"),
    ("rozwiąż", "rozwiaz"),
    ("znajdź", "znajdz"),
    ("określ", "okresl"),
    ("sprawdź", "sprawdz"),
    ("udowodnij", "udowodnij"),
    ("uzasadnij", "uzasadnij"),
    ("wykaż", "wykaz"),
    ("zapisz", "zapisz"),
    // Concepts
    ("równanie", "rownanie"),
    ("tożsamość", "tozsamosc"),
    ("wzór", "wzor"),
    ("funkcja", "funkcja"),
    ("trójkąt", "trojkat"),
    ("przeciwprostokątna", "przeciwprostokatna"),
    ("przyprostokątna", "przyprostokatna"),
    ("wysokość", "wysokosc"),
    ("podstawa", "podstawa"),
    ("kąt", "kat"),
    ("ćwiartka", "cwiartka"),
    ("ćwiartki", "cwiartka"),
    ("współrzędne", "wspolrzedne"),
    ("układ", "uklad"),
    ("ciąg", "ciag"),
    ("wyraz", "wyraz"),
    ("suma", "suma"),
    ("iloczyn", "iloczyn"),
    ("różnica", "roznica"),
    ("iloraz", "iloraz"),
];

/// Polish stop words dropped during tokenization
pub const STOP_WORDS: &[&str] = &[
    "i", "w", "z", "na", "do", "o", "od", "po", "za", "ze", "że", "to", "ta", "te", "tej",
    "tym", "tych", "jest", "są", "było", "będzie", "ma", "mają", "może", "można", "oraz",
    "lub", "albo", "gdy", "jeśli", "dla", "przez", "bez", "pod", "nad", "przed", "między",
    "przy", "według", "około", "podczas", "gdzie", "jak", "czy", "co", "który", "która",
    "które", "jakie", "jaki", "jaką", "się", "go", "jej", "jego", "ich", "im", "mu", "ją",
    "je", "nas", "was", "nim", "nią", "nimi", "jeden", "jedna", "jedno", "dwa", "dwaj",
    "dwie", "trzy", "trzej", "cztery", "pięć", "sześć", "bardzo", "tylko", "już", "jeszcze",
    "także", "również", "więc", "czyli", "więcej", "mniej", "każdy", "każda", "każde",
    "wszystkie", "wszystkich", "wszystkim", "żaden", "żadna", "żadne",
];

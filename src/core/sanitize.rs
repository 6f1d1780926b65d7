// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove editorial apparatus from a translation line: `{...}` variants,
/// `(1 ms. has instead: ...)`, `( cf. ...)`, `( = Alster ...)` and bare
/// catalogue refs like `( 6.1.07.43 )`. Whitespace is left for the caller.
pub fn strip_editorial(line: &str) -> String {
    let patterns = [
        re!(r"\{.*?\}"),
        re!(r"(?i)\(\s*1 ms\. has instead:.*?\)"),
        re!(r"\(\s*cf\..*?\)"),
        re!(r"\(\s*=.*?\)"),
        re!(r"\(\s*\d+\.\d+\.\d+.*?\)"),
    ];
    let mut out = s!(line);
    for re in patterns {
        out = re.replace_all(&out, "").into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_ws("  a \t b\n\nc  "), "a b c");
        assert_eq!(normalize_ws("   "), "");
    }

    #[test]
    fn strips_variants_and_references() {
        let line = "A thing {var.} is good ( cf. 6.1.02.3 ) for you (= Alster 1997).";
        assert_eq!(normalize_ws(&strip_editorial(line)), "A thing is good for you .");
    }

    #[test]
    fn strips_manuscript_variants_case_insensitively() {
        let line = "He ate (1 MS. has instead: drank ) bread.";
        assert_eq!(normalize_ws(&strip_editorial(line)), "He ate bread.");
    }

    #[test]
    fn strips_catalogue_refs_but_keeps_other_parentheses() {
        let line = "The ox (the big one) ran ( 6.1.07.43 ).";
        assert_eq!(normalize_ws(&strip_editorial(line)), "The ox (the big one) ran .");
    }
}

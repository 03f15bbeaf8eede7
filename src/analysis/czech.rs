// Czech light stemmer (Dolamic & Savoy).
//
// rust-stemmers has no Czech algorithm, so the reduction is implemented
// here: strip case endings, strip possessive suffixes, then normalize
// palatalized stem endings. Input must already be lowercased; the
// tokenizer guarantees that.
//
// The algorithm is intentionally light: it over-merges less than an
// aggressive stemmer and leaves short words (< 4 code points) untouched
// apart from the final normalization step.

/// Stem a lowercased Czech term.
pub fn stem(term: &str) -> String {
    let mut chars: Vec<char> = term.chars().collect();
    let mut len = chars.len();

    len = remove_case(&chars, len);
    len = remove_possessives(&chars, len);
    len = normalize(&mut chars, len);

    chars.truncate(len);
    chars.into_iter().collect()
}

fn ends_with(s: &[char], len: usize, suffix: &str) -> bool {
    let n = suffix.chars().count();
    n <= len && s[len - n..len].iter().copied().eq(suffix.chars())
}

/// Strip noun/adjective case endings, longest first.
fn remove_case(s: &[char], len: usize) -> usize {
    if len > 7 && ends_with(s, len, "atech") {
        return len - 5;
    }
    if len > 6 && (ends_with(s, len, "ětem") || ends_with(s, len, "etem") || ends_with(s, len, "atům"))
    {
        return len - 4;
    }
    if len > 5 {
        const THREE: [&str; 25] = [
            "ech", "ich", "ích", "ého", "ěmi", "emi", "ému", "ěte", "ete", "ěti", "eti", "ího",
            "iho", "ími", "ímu", "imu", "ách", "ata", "aty", "ých", "ama", "ami", "ové", "ovi",
            "ými",
        ];
        if THREE.iter().any(|suf| ends_with(s, len, suf)) {
            return len - 3;
        }
    }
    if len > 4 {
        const TWO: [&str; 12] = [
            "em", "es", "ém", "ím", "ům", "at", "ám", "os", "us", "ým", "mi", "ou",
        ];
        if TWO.iter().any(|suf| ends_with(s, len, suf)) {
            return len - 2;
        }
    }
    if len > 3 {
        const VOWELS: [char; 12] = ['a', 'e', 'i', 'o', 'u', 'ů', 'y', 'á', 'é', 'í', 'ý', 'ě'];
        if VOWELS.contains(&s[len - 1]) {
            return len - 1;
        }
    }
    len
}

/// Strip possessive suffixes (-ov, -in, -ův).
fn remove_possessives(s: &[char], len: usize) -> usize {
    if len > 5 && (ends_with(s, len, "ov") || ends_with(s, len, "in") || ends_with(s, len, "ův")) {
        return len - 2;
    }
    len
}

/// Undo palatalization at the stem boundary so variants of one root meet
/// at the same spelling (čt→ck, št→sk, c/č→k, z/ž→h, fleeting -e-, ů→o).
fn normalize(s: &mut [char], len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if ends_with(s, len, "čt") {
        s[len - 2] = 'c';
        s[len - 1] = 'k';
        return len;
    }
    if ends_with(s, len, "št") {
        s[len - 2] = 's';
        s[len - 1] = 'k';
        return len;
    }
    match s[len - 1] {
        'c' | 'č' => {
            s[len - 1] = 'k';
            return len;
        }
        'z' | 'ž' => {
            s[len - 1] = 'h';
            return len;
        }
        _ => {}
    }
    if len > 1 && s[len - 2] == 'e' {
        s[len - 2] = s[len - 1];
        return len - 1;
    }
    if len > 2 && s[len - 2] == 'ů' {
        s[len - 2] = 'o';
        return len;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_endings_merge_inflections() {
        // kočka / kočky / kočkám all reduce to the same root
        assert_eq!(stem("kočka"), "kočk");
        assert_eq!(stem("kočky"), "kočk");
        assert_eq!(stem("kočkám"), "kočk");
    }

    #[test]
    fn test_neuter_o_stem() {
        assert_eq!(stem("auto"), "aut");
        assert_eq!(stem("auta"), "aut");
        assert_eq!(stem("autům"), "aut");
    }

    #[test]
    fn test_fleeting_e_removed() {
        assert_eq!(stem("pes"), "ps");
    }

    #[test]
    fn test_palatalization_normalized() {
        // matka / matce: c → k at the boundary
        assert_eq!(stem("matce"), stem("matka"));
    }

    #[test]
    fn test_possessive_meets_base_form() {
        // tatínkův (possessive) and tatínek (fleeting e) share a root
        assert_eq!(stem("tatínkův"), "tatínk");
        assert_eq!(stem("tatínek"), "tatínk");
    }

    #[test]
    fn test_root_form_is_stable() {
        // already-reduced input passes through unchanged
        assert_eq!(stem("aut"), "aut");
        assert_eq!(stem("kočk"), "kočk");
    }

    #[test]
    fn test_short_and_empty_input() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("k"), "k");
        assert_eq!(stem("to"), "to");
    }
}

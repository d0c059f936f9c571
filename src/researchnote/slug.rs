//! Title to file name token conversion.
//!
//! A slug is the part of a note's file name between the date prefix and the
//! extension: `2012-10-30_Fitting_SDSS_spectra.rst`. Titles are transliterated
//! to ASCII first, so `Loïc Séguin` becomes `Loic_Seguin`.

use deunicode::deunicode;

/// Converts a free-text title into an ASCII file name token.
///
/// Non-ASCII characters are transliterated, ASCII punctuation is removed and
/// whitespace becomes `_`. The result may be empty.
pub fn slugify(title: &str) -> String {
    deunicode(title)
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c.is_ascii_whitespace() {
                Some('_')
            } else {
                // punctuation and control characters
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_slug_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '-'
    }

    #[test]
    fn replaces_spaces_with_underscores() {
        assert_eq!(slugify("Fitting SDSS spectra"), "Fitting_SDSS_spectra");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("Hello, world. (again!)"), "Hello_world_again");
        assert_eq!(slugify("SDSS J1406-0119"), "SDSS_J14060119");
        assert_eq!(slugify("a_b"), "ab");
    }

    #[test]
    fn transliterates_non_ascii() {
        assert_eq!(slugify("Loïc Séguin-Charbonneau"), "Loic_SeguinCharbonneau");
        assert_eq!(slugify("Ærøskøbing"), "AEroskobing");
    }

    #[test]
    fn transliteration_output_is_stripped_too() {
        let slug = slugify("«Über» “quoted” — dash");
        assert!(slug.chars().all(is_slug_char), "unexpected slug {slug:?}");
        assert!(slug.contains("Uber"));
        assert!(slug.contains("quoted"));
    }

    #[test]
    fn punctuation_only_title_gives_empty_slug() {
        assert_eq!(slugify("?!..,"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn output_only_contains_safe_characters() {
        let titles = [
            "Déjà vu: a study!",
            "Résumé @ 10:30 #tags",
            "naïve/Bayes\\split",
            "Σύνοψη ~ (π ≈ 3.14)",
            "tab\tand\nnewline",
        ];
        for title in titles {
            let slug = slugify(title);
            assert!(
                slug.chars().all(is_slug_char),
                "{title:?} produced {slug:?}"
            );
        }
    }

    #[test]
    fn is_deterministic() {
        let title = "Problème de normalisation";
        assert_eq!(slugify(title), slugify(title));
    }
}

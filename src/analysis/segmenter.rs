//! Street-name segmentation.
//!
//! Composite address strings carry several candidate street names separated
//! by `/` or `,` ("Storgatan/Kungsgatan", "Main St, 2nd Ave"). Segmentation
//! turns such an input into independent fragments; whitespace inside a
//! fragment is preserved so multiword street names stay intact for token
//! scoring and location extraction.

/// Split an address string into candidate street-name fragments.
///
/// Separator runs of `/` and `,` delimit fragments; fragments are trimmed
/// and empty fragments are discarded. Order-preserving, computed eagerly.
pub fn segment(text: &str) -> Vec<String> {
    text.split(['/', ','])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_on_slash() {
        assert_eq!(segment("MainSt/2ndAve"), vec!["MainSt", "2ndAve"]);
    }

    #[test]
    fn test_segment_on_comma() {
        assert_eq!(
            segment("Storgatan, Kungsgatan"),
            vec!["Storgatan", "Kungsgatan"]
        );
    }

    #[test]
    fn test_segment_keeps_multiword_fragments() {
        assert_eq!(segment("Stora gatan 7"), vec!["Stora gatan 7"]);
        assert_eq!(
            segment("Stora gatan 7 / Lilla torget"),
            vec!["Stora gatan 7", "Lilla torget"]
        );
    }

    #[test]
    fn test_segment_drops_empty_fragments() {
        assert_eq!(segment("Storgatan//Kungsgatan"), vec!["Storgatan", "Kungsgatan"]);
        assert_eq!(segment("/,Storgatan,/"), vec!["Storgatan"]);
        assert!(segment("").is_empty());
        assert!(segment(" /, / ").is_empty());
    }

    #[test]
    fn test_segment_trims_whitespace() {
        assert_eq!(
            segment("  Storgatan  /  Kungsgatan  "),
            vec!["Storgatan", "Kungsgatan"]
        );
    }
}

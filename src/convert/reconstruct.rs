//! Output reconstruction.

use super::report::Fragment;

/// Splice fragment rewrites into `original`.
///
/// Text between fragments is copied verbatim. The cursor always advances by the
/// length of the *original* span, since a rewrite is usually longer than what it
/// replaces. `fragments` must be sorted and non-overlapping.
pub fn reconstruct(original: &str, fragments: &[Fragment]) -> String {
    let grown: usize = fragments
        .iter()
        .map(|f| f.modified.len().saturating_sub(f.original.len()))
        .sum();
    let mut out = String::with_capacity(original.len() + grown);
    let mut cursor = 0;

    for fragment in fragments {
        let start = fragment.file_pos();
        if start < cursor {
            continue;
        }
        out.push_str(&original[cursor..start]);
        out.push_str(&fragment.modified);
        cursor = start + fragment.original.len();
    }
    out.push_str(&original[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::text_range;
    use crate::knowledge::Surface;
    use crate::patterns::MemberKind;

    fn fragment(text: &str, start: usize, original: &str, modified: &str) -> Fragment {
        assert_eq!(&text[start..start + original.len()], original);
        Fragment {
            surface: Surface::Input,
            kind: MemberKind::Property,
            range: text_range(start, start + original.len()),
            pos: Default::default(),
            original: original.into(),
            modified: modified.into(),
            used_class: "Input".into(),
            used_member: "x".into(),
            used_param: None,
            literal: None,
            rig: None,
            problem: Default::default(),
            warning: Default::default(),
        }
    }

    #[test]
    fn test_gaps_are_copied_verbatim() {
        let text = "a = Input.x;  b = Input.y; // end";
        let fragments = vec![
            fragment(text, 4, "Input.x", "CF2Input.x"),
            fragment(text, 18, "Input.y", "Input.y"),
        ];
        assert_eq!(
            reconstruct(text, &fragments),
            "a = CF2Input.x;  b = Input.y; // end"
        );
    }

    #[test]
    fn test_no_fragments_is_identity() {
        let text = "nothing to see\r\n";
        assert_eq!(reconstruct(text, &[]), text);
    }

    #[test]
    fn test_fragment_at_end_of_text() {
        let text = "v = Input.x";
        let fragments = vec![fragment(text, 4, "Input.x", "Long.Name.x")];
        assert_eq!(reconstruct(text, &fragments), "v = Long.Name.x");
    }
}

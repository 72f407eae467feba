//! Routing of classification answers.

use namesake::BranchLabel;
use proptest::prelude::*;

proptest! {
    #[test]
    fn padded_found_in_any_case_routes_to_found(
        lead in "[ \t\r\n]{0,4}",
        trail in "[ \t\r\n]{0,4}",
        upper in prop::collection::vec(any::<bool>(), 5),
    ) {
        let word: String = "found"
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        let answer = format!("{lead}{word}{trail}");

        prop_assert_eq!(BranchLabel::from_answer(&answer), BranchLabel::Found);
    }

    #[test]
    fn any_other_answer_routes_to_not_found(answer in "\\PC*") {
        prop_assume!(answer.trim().to_lowercase() != "found");

        prop_assert_eq!(BranchLabel::from_answer(&answer), BranchLabel::NotFound);
    }
}

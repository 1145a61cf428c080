//! Plain-text export of collected member records.

use crate::member::record::Member;

/// Labeled rows for one member, in report order. The Protein row carries
/// the rendered translation, sentinel text included.
pub fn member_rows(member: &Member) -> Vec<(&'static str, String)> {
    vec![
        ("Name", member.name.clone()),
        ("Slack", member.slack.clone()),
        ("Country", member.country.clone()),
        ("Hobby", member.hobby.clone()),
        ("Affiliations", member.affiliations.clone()),
        ("Favorite Gene", member.favorite_gene.clone()),
        ("DNA", member.dna.clone()),
        ("Protein", member.translation().to_string()),
        ("GitHub", member.github.clone()),
        ("LinkedIn", member.linkedin.clone()),
    ]
}

/// One member's info block.
pub fn member_report(member: &Member) -> String {
    let mut out = String::new();
    out.push_str("===== TEAM MEMBER INFO =====\n");
    for (label, value) in member_rows(member) {
        out.push_str(label);
        out.push_str(": ");
        out.push_str(&value);
        out.push('\n');
    }
    out.push_str("============================\n");
    out
}

/// Full team summary printed at the end of a session: every member's
/// block, then the Hamming distance between the first two members' DNA
/// when at least two records were collected. A length mismatch shows the
/// comparator's message in place of the number.
pub fn roster_report(members: &[Member]) -> String {
    let mut out = String::new();
    out.push_str("=========== TEAM SUMMARY ===========\n");
    for member in members {
        out.push_str(&member_report(member));
        out.push('\n');
    }
    out.push_str("====================================\n");

    if let [first, second, ..] = members {
        let distance = match first.hamming_to(second) {
            Ok(d) => d.to_string(),
            Err(message) => message,
        };
        out.push_str(&format!(
            "Hamming Distance between {} and {}: {}\n",
            first.name, second.name, distance
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, dna: &str) -> Member {
        Member::new(name, "@slack", "Nowhere", "", "", "BRCA1", dna, "", "")
    }

    #[test]
    fn rows_carry_the_rendered_translation() {
        let rows = member_rows(&member("Ada", "ATGAAATAG"));
        let protein = rows
            .iter()
            .find(|(label, _)| *label == "Protein")
            .map(|(_, value)| value.as_str());
        assert_eq!(protein, Some("MK"));
    }

    #[test]
    fn rows_use_the_sentinel_for_empty_dna() {
        let rows = member_rows(&member("Ada", ""));
        let protein = rows
            .iter()
            .find(|(label, _)| *label == "Protein")
            .map(|(_, value)| value.as_str());
        assert_eq!(protein, Some("No valid translation available."));
    }

    #[test]
    fn report_lists_every_label() {
        let report = member_report(&member("Ada", "ATG"));
        for label in [
            "Name", "Slack", "Country", "Hobby", "Affiliations",
            "Favorite Gene", "DNA", "Protein", "GitHub", "LinkedIn",
        ] {
            assert!(report.contains(label), "missing label {label}");
        }
    }

    #[test]
    fn roster_report_includes_first_pair_distance() {
        let team = vec![member("Ada", "ATCG"), member("Grace", "ATGG")];
        let report = roster_report(&team);
        assert!(report.contains("Hamming Distance between Ada and Grace: 1"));
    }

    #[test]
    fn roster_report_surfaces_length_mismatch() {
        let team = vec![member("Ada", "AT"), member("Grace", "ATG")];
        let report = roster_report(&team);
        assert!(report.contains("Sequences must be of equal length for comparison."));
    }

    #[test]
    fn single_member_roster_has_no_distance_line() {
        let report = roster_report(&[member("Ada", "ATCG")]);
        assert!(!report.contains("Hamming Distance"));
    }
}

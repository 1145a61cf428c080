use crate::sequence::{
    hamming_distance, is_valid_dna, normalize_dna, translate_dna, Translation,
};

/// One collected team-member profile.
///
/// The DNA sequence is stored trimmed and uppercased; every other field is
/// stored trimmed. A member with an invalid DNA sequence is still a valid
/// record, the collector warns and keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub slack: String,
    pub country: String,
    pub hobby: String,
    pub affiliations: String,
    pub favorite_gene: String,
    pub dna: String,
    pub github: String,
    pub linkedin: String,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        slack: &str,
        country: &str,
        hobby: &str,
        affiliations: &str,
        favorite_gene: &str,
        dna: &str,
        github: &str,
        linkedin: &str,
    ) -> Member {
        Member {
            name: name.trim().to_string(),
            slack: slack.trim().to_string(),
            country: country.trim().to_string(),
            hobby: hobby.trim().to_string(),
            affiliations: affiliations.trim().to_string(),
            favorite_gene: favorite_gene.trim().to_string(),
            dna: normalize_dna(dna),
            github: github.trim().to_string(),
            linkedin: linkedin.trim().to_string(),
        }
    }

    /// True iff the stored DNA sequence uses only A, T, C, G.
    pub fn is_valid_dna(&self) -> bool {
        is_valid_dna(&self.dna)
    }

    /// Translate the stored DNA sequence into a protein.
    pub fn translation(&self) -> Translation {
        translate_dna(&self.dna)
    }

    /// Hamming distance between this member's DNA and another's.
    pub fn hamming_to(&self, other: &Member) -> Result<usize, String> {
        hamming_distance(&self.dna, &other.dna)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_with_dna(name: &str, dna: &str) -> Member {
        Member::new(name, "", "", "", "", "", dna, "", "")
    }

    #[test]
    fn construction_normalizes_fields() {
        let member = Member::new(
            "  Ada  ",
            "@ada",
            "UK",
            "chess",
            "Analytical Engine Society",
            "TP53",
            "  atgaaa \n",
            "https://github.com/ada",
            "https://linkedin.com/in/ada",
        );
        assert_eq!(member.name, "Ada");
        assert_eq!(member.dna, "ATGAAA");
        assert!(member.is_valid_dna());
    }

    #[test]
    fn invalid_dna_still_builds_a_record() {
        let member = member_with_dna("Grace", "ATXG");
        assert!(!member.is_valid_dna());
        assert_eq!(member.dna, "ATXG");
    }

    #[test]
    fn translation_goes_through_the_core() {
        let member = member_with_dna("Ada", "atgaaatag");
        assert_eq!(member.translation().to_string(), "MK");

        let empty = member_with_dna("Nobody", "");
        assert!(!empty.translation().is_available());
    }

    #[test]
    fn hamming_between_members() {
        let a = member_with_dna("A", "ATCG");
        let b = member_with_dna("B", "ATGG");
        assert_eq!(a.hamming_to(&b), Ok(1));

        let c = member_with_dna("C", "AT");
        assert!(a.hamming_to(&c).is_err());
    }
}

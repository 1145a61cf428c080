use log::{debug, info, trace, warn};

use crate::member::Member;
use crate::sequence::{
    hamming_distance, is_valid_dna, matching_positions, normalize_dna, translate_dna, Translation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Entry,
    Roster,
}

/// The nine profile fields of the entry form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Name,
    Slack,
    Country,
    Hobby,
    Affiliations,
    FavoriteGene,
    Dna,
    Github,
    Linkedin,
}

pub const ENTRY_FIELDS: [EntryField; 9] = [
    EntryField::Name,
    EntryField::Slack,
    EntryField::Country,
    EntryField::Hobby,
    EntryField::Affiliations,
    EntryField::FavoriteGene,
    EntryField::Dna,
    EntryField::Github,
    EntryField::Linkedin,
];

/// Index of the DNA field within [`ENTRY_FIELDS`].
pub const DNA_FIELD: usize = 6;

impl EntryField {
    pub fn label(self) -> &'static str {
        match self {
            EntryField::Name => "Name",
            EntryField::Slack => "Slack Username",
            EntryField::Country => "Country",
            EntryField::Hobby => "Hobby",
            EntryField::Affiliations => "Affiliations",
            EntryField::FavoriteGene => "Favorite Gene",
            EntryField::Dna => "DNA Sequence",
            EntryField::Github => "GitHub",
            EntryField::Linkedin => "LinkedIn",
        }
    }
}

/// A finished two-member comparison, kept for rendering.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub left: usize,
    pub right: usize,
    pub distance: Result<usize, String>,
    pub matching: Vec<bool>,
}

pub struct App {
    pub view: View,
    pub field_values: [String; ENTRY_FIELDS.len()],
    pub selected_field: usize,
    pub roster: Vec<Member>,
    pub selected_member: usize,
    pub dna_is_valid: bool,
    pub translation_preview: Translation,
    pub status_message: Option<String>,
    pub compare_first: Option<usize>,
    pub comparison: Option<Comparison>,
}

impl App {
    pub fn new() -> App {
        debug!("Creating new App instance");
        App {
            view: View::Entry,
            field_values: std::array::from_fn(|_| String::new()),
            selected_field: 0,
            roster: Vec::new(),
            selected_member: 0,
            dna_is_valid: true,
            translation_preview: Translation::Unavailable,
            status_message: None,
            compare_first: None,
            comparison: None,
        }
    }

    pub fn current_field(&self) -> EntryField {
        ENTRY_FIELDS[self.selected_field]
    }

    pub fn current_value(&self) -> &str {
        &self.field_values[self.selected_field]
    }

    /// The DNA field as the core sees it: trimmed and uppercased.
    pub fn normalized_dna(&self) -> String {
        normalize_dna(&self.field_values[DNA_FIELD])
    }

    pub fn on_key(&mut self, c: char) {
        self.field_values[self.selected_field].push(c);
        self.status_message = None;
        if self.current_field() == EntryField::Dna {
            self.refresh_dna_preview();
        }
    }

    pub fn on_backspace(&mut self) {
        self.field_values[self.selected_field].pop();
        if self.current_field() == EntryField::Dna {
            self.refresh_dna_preview();
        }
    }

    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % ENTRY_FIELDS.len();
    }

    pub fn prev_field(&mut self) {
        self.selected_field = if self.selected_field == 0 {
            ENTRY_FIELDS.len() - 1
        } else {
            self.selected_field - 1
        };
    }

    fn refresh_dna_preview(&mut self) {
        let dna = self.normalized_dna();
        self.dna_is_valid = is_valid_dna(&dna);
        self.translation_preview = translate_dna(&dna);
        trace!(
            "DNA preview refreshed: {} characters, valid: {}",
            dna.chars().count(),
            self.dna_is_valid
        );
    }

    /// The 0-2 characters of the unfinished trailing codon in the DNA
    /// field, feeding the codon completion guide.
    pub fn current_partial_codon(&self) -> String {
        let dna = self.normalized_dna();
        let count = dna.chars().count();
        dna.chars().skip((count / 3) * 3).collect()
    }

    /// Turn the form into a member record. Invalid DNA warns but still
    /// records the member.
    pub fn submit_member(&mut self) {
        if self.field_values.iter().all(|v| v.trim().is_empty()) {
            self.status_message = Some("Enter member details before submitting.".to_string());
            return;
        }

        let member = Member::new(
            &self.field_values[0],
            &self.field_values[1],
            &self.field_values[2],
            &self.field_values[3],
            &self.field_values[4],
            &self.field_values[5],
            &self.field_values[6],
            &self.field_values[7],
            &self.field_values[8],
        );

        if member.is_valid_dna() {
            self.status_message = Some(format!("Added member {}.", member.name));
        } else {
            warn!("Member {} submitted with an invalid DNA sequence", member.name);
            self.status_message = Some(
                "Invalid DNA sequence detected! Only A, T, C and G are allowed.".to_string(),
            );
        }

        info!(
            "Recorded member {} ({} nucleotides)",
            member.name,
            member.dna.chars().count()
        );
        self.roster.push(member);

        for value in self.field_values.iter_mut() {
            value.clear();
        }
        self.selected_field = 0;
        self.refresh_dna_preview();
    }

    pub fn show_roster(&mut self) {
        self.view = View::Roster;
        if self.selected_member >= self.roster.len() {
            self.selected_member = 0;
        }
        debug!("Roster view opened with {} members", self.roster.len());
    }

    pub fn show_entry(&mut self) {
        self.view = View::Entry;
    }

    pub fn next_member(&mut self) {
        if !self.roster.is_empty() {
            self.selected_member = (self.selected_member + 1) % self.roster.len();
        }
    }

    pub fn prev_member(&mut self) {
        if !self.roster.is_empty() {
            self.selected_member = if self.selected_member == 0 {
                self.roster.len() - 1
            } else {
                self.selected_member - 1
            };
        }
    }

    /// Mark the selected member for comparison; the second mark runs the
    /// comparator.
    pub fn mark_for_comparison(&mut self) {
        if self.roster.is_empty() {
            return;
        }

        match self.compare_first {
            None => {
                self.compare_first = Some(self.selected_member);
                self.status_message = Some(format!(
                    "Marked {} for comparison. Mark a second member.",
                    self.roster[self.selected_member].name
                ));
            }
            Some(left) => {
                self.run_comparison(left, self.selected_member);
                self.compare_first = None;
            }
        }
    }

    fn run_comparison(&mut self, left: usize, right: usize) {
        let a = &self.roster[left];
        let b = &self.roster[right];
        let distance = hamming_distance(&a.dna, &b.dna);

        match &distance {
            Ok(d) => info!(
                "Hamming distance between {} and {}: {}",
                a.name, b.name, d
            ),
            Err(message) => warn!(
                "Cannot compare {} and {}: {}",
                a.name, b.name, message
            ),
        }

        self.comparison = Some(Comparison {
            left,
            right,
            matching: matching_positions(&a.dna, &b.dna),
            distance,
        });
        self.status_message = None;
    }

    pub fn clear_comparison(&mut self) {
        self.comparison = None;
        self.compare_first = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_member(name: &str, dna: &str) -> App {
        let mut app = App::new();
        app.roster.push(Member::new(name, "", "", "", "", "", dna, "", ""));
        app
    }

    #[test]
    fn typing_targets_the_selected_field() {
        let mut app = App::new();
        app.on_key('A');
        app.next_field();
        app.on_key('b');
        assert_eq!(app.field_values[0], "A");
        assert_eq!(app.field_values[1], "b");
    }

    #[test]
    fn field_cycling_wraps() {
        let mut app = App::new();
        app.prev_field();
        assert_eq!(app.selected_field, ENTRY_FIELDS.len() - 1);
        app.next_field();
        assert_eq!(app.selected_field, 0);
    }

    #[test]
    fn dna_edits_refresh_the_preview() {
        let mut app = App::new();
        app.selected_field = DNA_FIELD;
        assert_eq!(app.current_field(), EntryField::Dna);

        for c in "atgaaatag".chars() {
            app.on_key(c);
        }
        assert!(app.dna_is_valid);
        assert_eq!(app.translation_preview.to_string(), "MK");

        app.on_key('x');
        assert!(!app.dna_is_valid);
    }

    #[test]
    fn partial_codon_tracks_the_remainder() {
        let mut app = App::new();
        app.selected_field = DNA_FIELD;
        assert_eq!(app.current_partial_codon(), "");
        app.on_key('A');
        app.on_key('T');
        assert_eq!(app.current_partial_codon(), "AT");
        app.on_key('G');
        assert_eq!(app.current_partial_codon(), "");
    }

    #[test]
    fn submission_records_and_clears() {
        let mut app = App::new();
        app.field_values[0] = "Ada".to_string();
        app.field_values[DNA_FIELD] = "atg".to_string();
        app.submit_member();

        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.roster[0].dna, "ATG");
        assert!(app.field_values.iter().all(|v| v.is_empty()));
        assert_eq!(app.selected_field, 0);
    }

    #[test]
    fn invalid_dna_warns_but_records() {
        let mut app = App::new();
        app.field_values[0] = "Grace".to_string();
        app.field_values[DNA_FIELD] = "ATXG".to_string();
        app.submit_member();

        assert_eq!(app.roster.len(), 1);
        let status = app.status_message.unwrap();
        assert!(status.contains("Invalid DNA sequence"));
    }

    #[test]
    fn empty_form_is_rejected() {
        let mut app = App::new();
        app.submit_member();
        assert!(app.roster.is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn two_marks_run_the_comparison() {
        let mut app = app_with_member("Ada", "ATCG");
        app.roster.push(Member::new("Grace", "", "", "", "", "", "ATGG", "", ""));
        app.show_roster();

        app.mark_for_comparison();
        assert!(app.comparison.is_none());
        app.next_member();
        app.mark_for_comparison();

        let comparison = app.comparison.expect("comparison should be set");
        assert_eq!(comparison.distance, Ok(1));
        assert_eq!(comparison.matching, vec![true, true, false, true]);
        assert!(app.compare_first.is_none());
    }

    #[test]
    fn length_mismatch_is_an_error_value() {
        let mut app = app_with_member("Ada", "AT");
        app.roster.push(Member::new("Grace", "", "", "", "", "", "ATG", "", ""));
        app.show_roster();

        app.mark_for_comparison();
        app.next_member();
        app.mark_for_comparison();

        let comparison = app.comparison.expect("comparison should be set");
        assert!(comparison.distance.is_err());
    }

    #[test]
    fn member_navigation_wraps() {
        let mut app = app_with_member("Ada", "ATCG");
        app.roster.push(Member::new("Grace", "", "", "", "", "", "ATGG", "", ""));
        app.show_roster();

        app.prev_member();
        assert_eq!(app.selected_member, 1);
        app.next_member();
        assert_eq!(app.selected_member, 0);
    }
}

//! Contact Statistics
//!
//! Summarizes the collection: total size, contacts per group, and how many
//! contacts were updated recently.

use chrono::NaiveDateTime;

use crate::models::ContactBook;

/// Number of contacts carrying one group label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    /// Group label
    pub group: String,
    /// Contacts in this group
    pub count: usize,
}

/// Contact Statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactStatistics {
    /// Total number of contacts
    pub total: usize,
    /// Per-group counts, in the order each group first appears
    pub by_group: Vec<GroupCount>,
    /// Contacts updated within the recent window
    pub recently_updated: usize,
    /// Length of the recent window in calendar days
    pub window_days: i64,
}

impl ContactStatistics {
    /// Compute statistics as of `now`
    ///
    /// A contact counts as recently updated when the calendar-day difference
    /// between `now` and its `updated_at` is at most `window_days`. Future
    /// timestamps count as recent.
    pub fn generate(book: &ContactBook, now: NaiveDateTime, window_days: i64) -> Self {
        let mut by_group: Vec<GroupCount> = Vec::new();
        let mut recently_updated = 0;
        let today = now.date();

        for contact in book {
            match by_group.iter_mut().find(|g| g.group == contact.group) {
                Some(entry) => entry.count += 1,
                None => by_group.push(GroupCount {
                    group: contact.group.clone(),
                    count: 1,
                }),
            }

            let age_days = (today - contact.updated_at.date()).num_days();
            if age_days <= window_days {
                recently_updated += 1;
            }
        }

        Self {
            total: book.len(),
            by_group,
            recently_updated,
            window_days,
        }
    }

    /// Format the statistics for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("\n--- CONTACT STATISTICS ---\n");
        output.push_str(&format!("Total Contacts: {}\n\n", self.total));

        output.push_str("Contacts by Group:\n");
        for group in &self.by_group {
            output.push_str(&format!("  {}: {} contact(s)\n", group.group, group.count));
        }

        output.push_str(&format!(
            "\nRecently Updated (last {} days): {}\n",
            self.window_days, self.recently_updated
        ));

        output
    }
}

//! Progress and warning notices emitted while building the template.
//!
//! Core code never prints directly. It hands notices to a [`Reporter`], so the
//! CLI can style them for the terminal while tests simply collect them.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Progress(String),
    Warning(String),
}

pub trait Reporter {
    fn progress(&mut self, message: &str);
    fn warning(&mut self, message: &str);
}

impl Reporter for Vec<Notice> {
    fn progress(&mut self, message: &str) {
        self.push(Notice::Progress(message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.push(Notice::Warning(message.to_string()));
    }
}

/// Warning messages out of a collected notice list.
#[cfg(test)]
pub fn warnings(notices: &[Notice]) -> Vec<&str> {
    notices
        .iter()
        .filter_map(|n| match n {
            Notice::Warning(msg) => Some(msg.as_str()),
            Notice::Progress(_) => None,
        })
        .collect()
}

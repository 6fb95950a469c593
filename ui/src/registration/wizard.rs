/// The three screens of the sign-up wizard, in order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum WizardStep {
    /// Name, email, username and password
    #[default]
    Identity,
    /// Date of birth, phone and address
    Contact,
    /// Role, faculty, department and role identifier
    Affiliation,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Identity,
        WizardStep::Contact,
        WizardStep::Affiliation,
    ];

    /// 1-based position shown to the user
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Identity => 1,
            WizardStep::Contact => 2,
            WizardStep::Affiliation => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(WizardStep::Identity),
            2 => Some(WizardStep::Contact),
            3 => Some(WizardStep::Affiliation),
            _ => None,
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Identity => "Account Details",
            WizardStep::Contact => "Contact Information",
            WizardStep::Affiliation => "Academic Information",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered_one_to_three() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(4), None);
    }

    #[test]
    fn test_transitions_stay_in_range() {
        assert_eq!(WizardStep::Identity.previous(), None);
        assert_eq!(WizardStep::Identity.next(), Some(WizardStep::Contact));
        assert_eq!(WizardStep::Contact.next(), Some(WizardStep::Affiliation));
        assert_eq!(WizardStep::Affiliation.next(), None);
        assert_eq!(WizardStep::Affiliation.previous(), Some(WizardStep::Contact));

        assert!(WizardStep::Identity.is_first());
        assert!(WizardStep::Affiliation.is_last());
    }
}

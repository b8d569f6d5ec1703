//! Demo request form fields

/// The fields of the demo request form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoField {
    Name,
    Email,
    Company,
    Timezone,
    Message,
}

impl DemoField {
    /// All fields in tab order
    pub const ALL: [DemoField; 5] = [
        DemoField::Name,
        DemoField::Email,
        DemoField::Company,
        DemoField::Timezone,
        DemoField::Message,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Timezone => "timezone",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Work Email",
            Self::Company => "Company / Team Size",
            Self::Timezone => "Preferred Time / Timezone",
            Self::Message => "What are you hoping to explore?",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@company.com",
            Self::Company => "Acme Inc. / 50 engineers",
            Self::Timezone => "Next week / PST",
            Self::Message => "Tell us about your team's context management challenges...",
        }
    }

    /// Only the company field may be left empty
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Company)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

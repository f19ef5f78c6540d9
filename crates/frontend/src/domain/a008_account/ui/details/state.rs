use contracts::domain::a008_account::{AccountPreferences, ProfileDraft};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AccountSection {
    #[default]
    Profile,
    Activity,
    Notifications,
    Security,
    Settings,
}

impl AccountSection {
    pub fn all() -> [AccountSection; 5] {
        [
            AccountSection::Profile,
            AccountSection::Activity,
            AccountSection::Notifications,
            AccountSection::Security,
            AccountSection::Settings,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountSection::Profile => "Profile",
            AccountSection::Activity => "Activity",
            AccountSection::Notifications => "Notifications",
            AccountSection::Security => "Security",
            AccountSection::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AccountSection::Profile => "user",
            AccountSection::Activity => "file-text",
            AccountSection::Notifications => "bell",
            AccountSection::Security => "shield",
            AccountSection::Settings => "settings",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AccountState {
    pub section: AccountSection,
    pub editing: bool,
    /// Profile fields as shown in the form; seeded from the fixture profile
    pub draft: ProfileDraft,
    pub preferences: AccountPreferences,
    /// Acknowledgement of the last action that has no backing service
    pub notice: Option<String>,
}

pub fn create_state(draft: ProfileDraft) -> RwSignal<AccountState> {
    RwSignal::new(AccountState {
        draft,
        ..AccountState::default()
    })
}

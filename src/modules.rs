//! Portal Module Registry
//!
//! Static navigation catalogue per user type. Labels are locale keys under
//! `modules.*`, icons resolve through the icon library.

use crate::state::UserType;

/// A navigable portal module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavModule {
    /// Route/activation id, also used as icon lookup key.
    pub id: &'static str,
    /// Locale key of the display label.
    pub label_key: &'static str,
    /// Icon lookup key.
    pub icon: &'static str,
}

const fn module(id: &'static str, label_key: &'static str, icon: &'static str) -> NavModule {
    NavModule {
        id,
        label_key,
        icon,
    }
}

/// Logout pseudo-module shown below the divider in the sidenav.
pub const LOGOUT: NavModule = module("logout", "modules.logout", "logout");

const PATIENT_MODULES: &[NavModule] = &[
    module("dashboard", "modules.dashboard", "dashboard"),
    module("appointments", "modules.appointments", "appointments"),
    module("documents", "modules.documents", "documents"),
    module("messages", "modules.messages", "messages"),
    module("payments", "modules.payments", "payments"),
    module("shop", "modules.shop", "shop"),
];

const THERAPIST_MODULES: &[NavModule] = &[
    module("dashboard", "modules.dashboard", "dashboard"),
    module("calendar", "modules.calendar", "calendar"),
    module("contacts", "modules.contacts", "contacts"),
    module("documentation", "modules.documentation", "documentation"),
    module("invoices", "modules.invoices", "invoices"),
    module("payments", "modules.payments", "payments"),
    module("messages", "modules.messages", "messages"),
    module("shop", "modules.shop", "shop"),
];

pub fn patient_modules() -> &'static [NavModule] {
    PATIENT_MODULES
}

pub fn therapist_modules() -> &'static [NavModule] {
    THERAPIST_MODULES
}

/// Module set shown to the given user type.
pub fn modules_for(user_type: UserType) -> &'static [NavModule] {
    match user_type {
        UserType::Patient => PATIENT_MODULES,
        UserType::Therapist => THERAPIST_MODULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons;

    #[test]
    fn test_module_sets_start_at_dashboard() {
        assert_eq!(patient_modules()[0].id, "dashboard");
        assert_eq!(therapist_modules()[0].id, "dashboard");
    }

    #[test]
    fn test_module_sets_differ_by_user_type() {
        assert_eq!(modules_for(UserType::Patient).len(), 6);
        assert_eq!(modules_for(UserType::Therapist).len(), 8);
        assert!(modules_for(UserType::Therapist)
            .iter()
            .any(|m| m.id == "documentation"));
        assert!(!modules_for(UserType::Patient)
            .iter()
            .any(|m| m.id == "documentation"));
    }

    #[test]
    fn test_every_module_icon_resolves() {
        for module in PATIENT_MODULES
            .iter()
            .chain(THERAPIST_MODULES.iter())
            .chain(std::iter::once(&LOGOUT))
        {
            assert_ne!(
                icons::resolve_key(module.icon),
                icons::FALLBACK_KEY,
                "module {} falls back to the default icon",
                module.id
            );
        }
    }

    #[test]
    fn test_label_keys_are_namespaced() {
        for module in PATIENT_MODULES.iter().chain(THERAPIST_MODULES.iter()) {
            assert!(module.label_key.starts_with("modules."));
        }
    }
}

//! Icon Library
//!
//! Central lookup for semantic icon names. Resolves loose inputs (mixed
//! case, hyphens, spaces, legacy aliases, `icon` prefixes) to a canonical
//! definition and renders or applies the matching style class.

/// Canonical key used whenever an input cannot be resolved.
pub const FALLBACK_KEY: &str = "information";

/// A single icon definition from the icon font.
pub struct IconDef {
    pub key: &'static str,
    pub class: &'static str,
    pub glyph: char,
}

macro_rules! icon {
    ($key:literal, $class:literal, $glyph:literal) => {
        IconDef { key: $key, class: $class, glyph: $glyph }
    };
}

static DEFINITIONS: &[IconDef] = &[
    icon!("user", "icon_user", '\u{e900}'),
    icon!("user_earth", "icon_user_earth", '\u{e901}'),
    icon!("document_zip", "icon_document_zip", '\u{e902}'),
    icon!("drop_down_list", "icon_drop_down_list", '\u{e903}'),
    icon!("folder_zip", "icon_folder_zip", '\u{e904}'),
    icon!("navigate_cross", "icon_navigate_cross", '\u{e905}'),
    icon!("navigate_minus", "icon_navigate_minus", '\u{e95e}'),
    icon!("navigate_plus", "icon_navigate_plus", '\u{e95f}'),
    icon!("about", "icon_about", '\u{e906}'),
    icon!("bell", "icon_bell", '\u{e907}'),
    icon!("bookkeeper", "icon_bookkeeper", '\u{e908}'),
    icon!("bookmark", "icon_bookmark", '\u{e909}'),
    icon!("bottle_of_pills", "icon_bottle_of_pills", '\u{e90a}'),
    icon!("businesswoman", "icon_businesswoman", '\u{e90b}'),
    icon!("businesswomen", "icon_businesswomen", '\u{e90c}'),
    icon!("calendar", "icon_calendar", '\u{e90d}'),
    icon!("calendar_5", "icon_calendar_5", '\u{e90e}'),
    icon!("calendar_clock", "icon_calendar_clock", '\u{e90f}'),
    icon!("cash_register", "icon_cash_register", '\u{e910}'),
    icon!("cashier", "icon_cashier", '\u{e911}'),
    icon!("chart_area", "icon_chart_area", '\u{e912}'),
    icon!("chart_column", "icon_chart_column", '\u{e913}'),
    icon!("check", "icon_check", '\u{e914}'),
    icon!("checks", "icon_checks", '\u{e915}'),
    icon!("clipboard", "icon_clipboard", '\u{e916}'),
    icon!("clipboard_checks", "icon_clipboard_checks", '\u{e917}'),
    icon!("clipboard_paste", "icon_clipboard_paste", '\u{e918}'),
    icon!("contract", "icon_contract", '\u{e919}'),
    icon!("copy", "icon_copy", '\u{e91a}'),
    icon!("credit_card", "icon_credit_card", '\u{e91b}'),
    icon!("cut", "icon_cut", '\u{e91c}'),
    icon!("doctor", "icon_doctor", '\u{e91d}'),
    icon!("document_attachment", "icon_document_attachment", '\u{e91e}'),
    icon!("document_notebook", "icon_document_notebook", '\u{e91f}'),
    icon!("document_pulse", "icon_document_pulse", '\u{e920}'),
    icon!("door_exit", "icon_door_exit", '\u{e921}'),
    icon!("edit", "icon_edit", '\u{e922}'),
    icon!("eye", "icon_eye", '\u{e923}'),
    icon!("eye_blind", "icon_eye_blind", '\u{e924}'),
    icon!("fingerprint_scan", "icon_fingerprint_scan", '\u{e925}'),
    icon!("folder", "icon_folder", '\u{e926}'),
    icon!("folder_into", "icon_folder_into", '\u{e927}'),
    icon!("folder_open", "icon_folder_open", '\u{e928}'),
    icon!("folder_out", "icon_folder_out", '\u{e929}'),
    icon!("folders2", "icon_folders2", '\u{e92a}'),
    icon!("funnel", "icon_funnel", '\u{e92b}'),
    icon!("garbage", "icon_garbage", '\u{e92c}'),
    icon!("gearwheel", "icon_gearwheel", '\u{e92d}'),
    icon!("gearwheels", "icon_gearwheels", '\u{e92e}'),
    icon!("history", "icon_history", '\u{e92f}'),
    icon!("history2", "icon_history2", '\u{e930}'),
    icon!("home", "icon_home", '\u{e931}'),
    icon!("id_card", "icon_id_card", '\u{e932}'),
    icon!("index2", "icon_index2", '\u{e933}'),
    icon!("information", "icon_information", '\u{e934}'),
    icon!("key2", "icon_key2", '\u{e935}'),
    icon!("laptop", "icon_laptop", '\u{e936}'),
    icon!("lightbulb_off", "icon_lightbulb_off", '\u{e937}'),
    icon!("lock", "icon_lock", '\u{e938}'),
    icon!("lock_open", "icon_lock_open", '\u{e939}'),
    icon!("magic_wand", "icon_magic_wand", '\u{e93a}'),
    icon!("magnifying_glass", "icon_magnifying_glass", '\u{e93b}'),
    icon!("mail", "icon_mail", '\u{e93c}'),
    icon!("mail_open", "icon_mail_open", '\u{e93d}'),
    icon!("mail_open2", "icon_mail_open2", '\u{e93e}'),
    icon!("message", "icon_message", '\u{e93f}'),
    icon!("money_coins", "icon_money_coins", '\u{e940}'),
    icon!("money_coins2", "icon_money_coins2", '\u{e941}'),
    icon!("navigate_close", "icon_navigate_close", '\u{e942}'),
    icon!("navigate_down", "icon_navigate_down", '\u{e943}'),
    icon!("navigate_left", "icon_navigate_left", '\u{e944}'),
    icon!("navigate_open", "icon_navigate_open", '\u{e945}'),
    icon!("navigate_right", "icon_navigate_right", '\u{e946}'),
    icon!("navigate_up", "icon_navigate_up", '\u{e947}'),
    icon!("newspaper", "icon_newspaper", '\u{e948}'),
    icon!("note_text", "icon_note_text", '\u{e949}'),
    icon!("notebook", "icon_notebook", '\u{e94a}'),
    icon!("notebook3", "icon_notebook3", '\u{e94b}'),
    icon!("paperclip", "icon_paperclip", '\u{e94c}'),
    icon!("pill", "icon_pill", '\u{e94d}'),
    icon!("plus", "icon_plus", '\u{e94e}'),
    icon!("print_calculator", "icon_print_calculator", '\u{e94f}'),
    icon!("printer", "icon_printer", '\u{e950}'),
    icon!("question", "icon_question", '\u{e951}'),
    icon!("server_earth", "icon_server_earth", '\u{e952}'),
    icon!("shopping_bag_full", "icon_shopping_bag_full", '\u{e953}'),
    icon!("shopping_cart_full", "icon_shopping_cart_full", '\u{e954}'),
    icon!("sort_ascending", "icon_sort_ascending", '\u{e955}'),
    icon!("sort_descending", "icon_sort_descending", '\u{e956}'),
    icon!("stethoscope", "icon_stethoscope", '\u{e957}'),
    icon!("tag", "icon_tag", '\u{e958}'),
    icon!("view_1_1", "icon_view_1_1", '\u{e959}'),
    icon!("wallet", "icon_wallet", '\u{e95a}'),
    icon!("wax_seal", "icon_wax_seal", '\u{e95b}'),
    icon!("zoom_out", "icon_zoom_out", '\u{e95c}'),
    icon!("zoom_in", "icon_zoom_in", '\u{e95d}'),
];

/// Legacy and module-level names mapped onto canonical keys.
static ALIASES: &[(&str, &str)] = &[
    ("avatar", "user_earth"),
    ("users", "businesswomen"),
    ("help", "question"),
    ("profile", "user"),
    ("contact", "mail"),
    ("imprint", "information"),
    ("overview", "home"),
    ("dashboard", "home"),
    ("appointments", "calendar_clock"),
    ("contacts", "businesswomen"),
    ("documents", "document_zip"),
    ("documentation", "history2"),
    ("invoices", "print_calculator"),
    ("messages", "message"),
    ("shop", "shopping_bag_full"),
    ("logout", "door_exit"),
    ("payments", "credit_card"),
    ("settings", "gearwheel"),
    ("search_overview", "magic_wand"),
    ("search", "magnifying_glass"),
    ("dropdown", "navigate_down"),
    ("collapse", "navigate_left"),
    ("close", "navigate_cross"),
    ("add", "plus"),
    ("password-visible", "eye"),
    ("password-hidden", "eye_blind"),
    ("door-enter", "door_exit"),
    ("id-card", "id_card"),
    ("lightbulb", "lightbulb_off"),
    ("magic-wand", "magic_wand"),
    ("mail-open", "mail_open"),
    ("mail-out", "mail_open2"),
    ("calendar-5", "calendar_5"),
    ("calendar-clock", "calendar_clock"),
    ("calendar-12", "calendar"),
    ("pos-terminal", "cash_register"),
    ("credit-card", "credit_card"),
    ("chart-area", "chart_area"),
    ("chart-bar", "chart_column"),
    ("chart-ecg", "document_pulse"),
    ("alert-circle", "information"),
    ("user-tie", "id_card"),
    ("checklist-time", "clipboard_checks"),
    ("clipboard_check_edit", "clipboard_checks"),
    ("minus", "navigate_minus"),
    ("time-report", "history"),
    ("bag", "shopping_bag_full"),
    ("cart", "shopping_cart_full"),
    ("gear", "gearwheel"),
    ("gears", "gearwheels"),
    ("notepad", "note_text"),
    ("document", "document_attachment"),
    ("calculator", "print_calculator"),
    ("logo", "document_pulse"),
    ("logo-mark", "document_pulse"),
    ("receipt", "contract"),
    ("checklist", "clipboard_checks"),
    ("chat", "message"),
];

pub fn definition(key: &str) -> Option<&'static IconDef> {
    DEFINITIONS.iter().find(|def| def.key == key)
}

fn alias_target(name: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, target)| *target)
}

fn strip_icon_prefix(key: &str) -> &str {
    match key.strip_prefix("icon") {
        Some(rest) => rest
            .strip_prefix('_')
            .or_else(|| rest.strip_prefix('-'))
            .unwrap_or(rest),
        None => key,
    }
}

/// Resolves a loose icon name to its canonical key.
///
/// Tries the alias table against the normalized, space-normalized,
/// hyphen-normalized and prefix-stripped forms in that order, then direct
/// definitions against the same forms. Unresolvable input falls back to
/// [`FALLBACK_KEY`].
pub fn resolve_key(input: &str) -> &'static str {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return FALLBACK_KEY;
    }

    let spaced = normalized.split_whitespace().collect::<Vec<_>>().join("_");
    let hyphenated = spaced.replace('-', "_");
    let stripped = strip_icon_prefix(&hyphenated);

    let forms = [normalized.as_str(), spaced.as_str(), hyphenated.as_str(), stripped];

    for form in forms {
        if let Some(target) = alias_target(form) {
            return target;
        }
    }
    for form in forms {
        if let Some(def) = definition(form) {
            return def.key;
        }
    }

    FALLBACK_KEY
}

/// Resolves a loose icon name to `(style class, canonical key)`.
pub fn resolve_class(input: &str) -> (&'static str, &'static str) {
    let key = resolve_key(input);
    let def = definition(key)
        .or_else(|| definition(FALLBACK_KEY))
        .expect("fallback icon is always defined");
    (def.class, key)
}

/// Resolves a loose icon name to its style class alone.
pub fn resolve(input: &str) -> &'static str {
    resolve_class(input).0
}

/// Renders a self-closing icon fragment.
///
/// The requested name, the resolved canonical key and the resolved style
/// class are exposed as data attributes so rendered markup stays
/// inspectable. Attributes with a `None` value are omitted.
pub fn render(input: &str, extra_classes: &str, attributes: &[(&str, Option<&str>)]) -> String {
    let (class, key) = resolve_class(input);

    let mut classes = format!("icon {}", class);
    if !extra_classes.is_empty() {
        classes.push(' ');
        classes.push_str(extra_classes);
    }

    let mut attr_string = String::new();
    for (name, value) in attributes {
        if let Some(value) = value {
            attr_string.push_str(&format!(" {}=\"{}\"", name, value));
        }
    }

    format!(
        "<span class=\"{}\" data-icon=\"{}\" data-icon-resolved=\"{}\" data-icon-class=\"{}\"{}></span>",
        classes, input, key, class, attr_string
    )
}

/// Applies an icon to an existing element.
///
/// The previously applied style class is tracked in `data-icon-class` and
/// removed first, so repeated application never accumulates classes.
pub fn apply(element: &web_sys::Element, input: &str) {
    let (class, key) = resolve_class(input);

    if let Some(previous) = element.get_attribute("data-icon-class") {
        if previous != class {
            let _ = element.class_list().remove_1(&previous);
        }
    }

    let _ = element.class_list().add_2("icon", class);
    let _ = element.set_attribute("data-icon", input);
    let _ = element.set_attribute("data-icon-resolved", key);
    let _ = element.set_attribute("data-icon-class", class);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_canonical_key() {
        assert_eq!(resolve("calendar"), "icon_calendar");
        assert_eq!(resolve_key("calendar"), "calendar");
    }

    #[test]
    fn test_resolve_is_variant_insensitive() {
        let canonical = resolve("credit_card");
        assert_eq!(resolve("CREDIT_CARD"), canonical);
        assert_eq!(resolve("credit-card"), canonical);
        assert_eq!(resolve("credit card"), canonical);
        assert_eq!(resolve("  Credit Card  "), canonical);
        assert_eq!(resolve("icon_credit_card"), canonical);
        assert_eq!(resolve("icon-credit-card"), canonical);
    }

    #[test]
    fn test_resolve_alias_before_definition() {
        assert_eq!(resolve_key("user"), "user");
        // "search" only exists as an alias.
        assert_eq!(resolve_key("search"), "magnifying_glass");
        assert_eq!(resolve_key("Icon Search"), "magnifying_glass");
    }

    #[test]
    fn test_resolve_falls_back_to_information() {
        assert_eq!(resolve(""), "icon_information");
        assert_eq!(resolve("   "), "icon_information");
        assert_eq!(resolve("no-such-icon-xyz"), "icon_information");
        assert!(!resolve("no-such-icon-xyz").is_empty());
    }

    #[test]
    fn test_module_ids_resolve() {
        for id in [
            "dashboard",
            "appointments",
            "documents",
            "messages",
            "payments",
            "shop",
            "calendar",
            "contacts",
            "documentation",
            "invoices",
            "logout",
        ] {
            assert_ne!(resolve_key(id), FALLBACK_KEY, "module icon missing: {}", id);
        }
    }

    #[test]
    fn test_every_alias_targets_a_definition() {
        for (alias, target) in ALIASES {
            assert!(
                definition(target).is_some(),
                "alias {} points at unknown key {}",
                alias,
                target
            );
        }
    }

    #[test]
    fn test_render_markup() {
        let markup = render("overview", "sidenav-item-icon", &[("id", Some("nav-icon"))]);
        assert!(markup.starts_with("<span class=\"icon icon_home sidenav-item-icon\""));
        assert!(markup.contains("data-icon=\"overview\""));
        assert!(markup.contains("data-icon-resolved=\"home\""));
        assert!(markup.contains("data-icon-class=\"icon_home\""));
        assert!(markup.contains(" id=\"nav-icon\""));
        assert!(markup.ends_with("></span>"));
    }

    #[test]
    fn test_render_omits_missing_attributes() {
        let markup = render("close", "", &[("id", None), ("role", Some("img"))]);
        assert!(!markup.contains("id="));
        assert!(markup.contains(" role=\"img\""));
    }

    #[test]
    fn test_fallback_definition_has_glyph() {
        let def = definition(FALLBACK_KEY).unwrap();
        assert_eq!(def.glyph, '\u{e934}');
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    fn icon_classes(element: &web_sys::Element) -> Vec<String> {
        let list = element.class_list();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter(|class| class.starts_with("icon_"))
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_reapply_leaves_exactly_one_icon_class() {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("span").unwrap();

        apply(&element, "dashboard");
        assert_eq!(icon_classes(&element), ["icon_home"]);

        apply(&element, "messages");
        assert_eq!(icon_classes(&element), ["icon_message"]);
        assert!(element.class_list().contains("icon"));

        assert_eq!(element.get_attribute("data-icon").as_deref(), Some("messages"));
        assert_eq!(
            element.get_attribute("data-icon-resolved").as_deref(),
            Some("message")
        );
        assert_eq!(
            element.get_attribute("data-icon-class").as_deref(),
            Some("icon_message")
        );
    }

    #[wasm_bindgen_test]
    fn test_reapply_same_name_is_stable() {
        let document = web_sys::window().unwrap().document().unwrap();
        let element = document.create_element("span").unwrap();

        apply(&element, "shop");
        apply(&element, "shop");

        assert_eq!(icon_classes(&element), ["icon_shopping_bag_full"]);
    }
}

pub const INVITATION_SYSTEM: &str = include_str!("../data/prompts/invitation_system.txt");
pub const INVITATION_USER: &str = include_str!("../data/prompts/invitation_user.txt");
pub const MUSICAL_PERFORMANCE: &str = include_str!("../data/prompts/musical_performance.txt");
pub const INVITATION_FALLBACK: &str = include_str!("../data/prompts/invitation_fallback.txt");
pub const PARTY_IMAGE: &str = include_str!("../data/prompts/party_image.txt");

pub const INVITATION_PAGE: &str = include_str!("../data/templates/invitation_page.html");
pub const TRACK_SECTION: &str = include_str!("../data/templates/track.html");
pub const NO_TRACK_SECTION: &str = include_str!("../data/templates/no_track.html");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substitution is single-pass: placeholder text inside a substituted value
/// is left alone. Unknown placeholders are kept verbatim.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let Some(end) = after_open.find("}}") else {
            result.push_str(&rest[start..]);
            return result;
        };

        let key = &after_open[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}} and {{a}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs and cats"
        );
    }

    #[test]
    fn test_render_does_not_expand_inside_values() {
        assert_eq!(
            render("{{a}} {{b}}", &[("a", "{{b}}"), ("b", "x")]),
            "{{b}} x"
        );
    }

    #[test]
    fn test_render_keeps_unknown_and_unterminated() {
        assert_eq!(render("{{missing}} ok", &[]), "{{missing}} ok");
        assert_eq!(render("tail {{open", &[("open", "x")]), "tail {{open");
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!INVITATION_SYSTEM.is_empty());
        assert!(!INVITATION_USER.is_empty());
        assert!(!MUSICAL_PERFORMANCE.is_empty());
        assert!(!INVITATION_FALLBACK.is_empty());
        assert!(!PARTY_IMAGE.is_empty());
    }

    #[test]
    fn test_party_templates_have_placeholders() {
        for template in [INVITATION_USER, INVITATION_FALLBACK, PARTY_IMAGE] {
            assert!(template.contains("{{occasion}}"));
            assert!(template.contains("{{color_theme}}"));
            assert!(template.contains("{{location}}"));
        }
    }

    #[test]
    fn test_page_template_has_slots() {
        for slot in ["{{invitation}}", "{{image_src}}", "{{music}}"] {
            assert!(INVITATION_PAGE.contains(slot));
        }
        assert!(TRACK_SECTION.contains("{{embed_url}}"));
        assert!(NO_TRACK_SECTION.contains("{{notice}}"));
    }
}

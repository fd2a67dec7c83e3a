//! Text rendering of the page view for the terminal front end.

use crate::i18n::Locale;
use crate::views::config_view::{ButtonVariant, PageView, Widget};
use rust_i18n::t;

/// Width of the label column
const LABEL_WIDTH: usize = 28;

/// Render `view` as plain text lines
pub fn render_text(view: &PageView, locale: Locale) -> String {
    let form = match view {
        PageView::Loading { message } => return format!("{message}\n"),
        PageView::Form(form) => form,
    };

    let mut out = String::new();
    for row in &form.rows {
        let value = match &row.widget {
            Widget::Toggle { checked, .. } => {
                if *checked { "[x]".to_string() } else { "[ ]".to_string() }
            }
            Widget::Text { value, .. } => format!("\"{value}\""),
        };
        let key = match &row.widget {
            Widget::Toggle { field, .. } => field.key(),
            Widget::Text { field, .. } => field.key(),
        };
        out.push_str(&format!("  {:<LABEL_WIDTH$} {value}  ({key})\n", row.label));
    }

    let marker = match form.commit.variant {
        ButtonVariant::Danger => format!("  * {}", t!("camera.unsaved", locale = locale.code())),
        ButtonVariant::Success => String::new(),
    };
    out.push_str(&format!("  <{}>{marker}\n", form.commit.label));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::camera::CameraConfig;
    use crate::state::{ConfigState, EditorEvent};
    use crate::views::ConfigView;

    #[test]
    fn test_render_loading() {
        let view = ConfigView::render(&ConfigState::Loading, Locale::EnUS);
        assert_eq!(render_text(&view, Locale::EnUS), "Loading...\n");
    }

    #[test]
    fn test_render_form() {
        let state = ConfigState::from_record(Some(CameraConfig::default()));
        let view = ConfigView::render(&state, Locale::EnUS);
        let text = render_text(&view, Locale::EnUS);

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Enable"));
        assert!(lines[0].contains("[ ]"));
        assert!(lines[1].contains("\"120\""));
        assert!(lines[1].ends_with("(tick_interval)"));
        assert!(lines[5].starts_with("  <update>"));
        assert!(lines[5].contains("unsaved changes"));
    }

    #[test]
    fn test_clean_form_has_no_marker() {
        let updater = |_: CameraConfig| {};
        let notifier = |_: &str| {};
        let mut state = ConfigState::from_record(Some(CameraConfig::default()));
        state.handle(EditorEvent::Commit, &updater, &notifier);
        let text = render_text(&ConfigView::render(&state, Locale::EnUS), Locale::EnUS);

        assert!(text.ends_with("  <update>\n"));
    }
}

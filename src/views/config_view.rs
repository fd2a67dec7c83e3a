//! Configuration View
//!
//! Projects the camera page state onto a toolkit-neutral form description:
//! one toggle per boolean field, one text input per text field and the commit
//! button. The projection carries no state of its own; the button variant is
//! a direct reading of the dirty flag.

use crate::domain::camera::{BoolField, TextField};
use crate::i18n::Locale;
use crate::state::{ConfigState, EditorEvent};
use rust_i18n::t;

/// Element id of the commit button
pub const COMMIT_BUTTON_ID: &str = "updateCamera";

/// Button variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Nothing left to save
    Success,
    /// Unsaved changes
    Danger,
}

/// Input widget of a form row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Checkbox bound to a boolean field
    Toggle { field: BoolField, checked: bool },
    /// Text input bound to a text field
    Text { field: TextField, value: String },
}

impl Widget {
    /// Event emitted when the operator clicks a toggle (inverts it)
    pub fn click(&self) -> Option<EditorEvent> {
        match self {
            Widget::Toggle { field, checked } => Some(EditorEvent::Toggle {
                field: *field,
                checked: !checked,
            }),
            Widget::Text { .. } => None,
        }
    }

    /// Event emitted when the operator types into a text input
    pub fn change(&self, value: impl Into<String>) -> Option<EditorEvent> {
        match self {
            Widget::Text { field, .. } => Some(EditorEvent::Text {
                field: *field,
                value: value.into(),
            }),
            Widget::Toggle { .. } => None,
        }
    }
}

/// One labelled input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub id: &'static str,
    pub label: String,
    pub widget: Widget,
}

/// Commit action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitButton {
    pub id: &'static str,
    pub label: String,
    pub variant: ButtonVariant,
}

/// The editable form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigForm {
    pub rows: Vec<FormRow>,
    pub commit: CommitButton,
}

impl ConfigForm {
    /// Find a row by element id
    pub fn row(&self, id: &str) -> Option<&FormRow> {
        self.rows.iter().find(|row| row.id == id)
    }
}

/// What the page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    /// Placeholder until the record arrives
    Loading { message: String },
    /// The editable form
    Form(ConfigForm),
}

/// Element id of a boolean field's checkbox
pub fn toggle_id(field: BoolField) -> &'static str {
    match field {
        BoolField::Enable => "camera_enable",
        BoolField::Upload => "camera_gdrive",
    }
}

/// Element id of a text field's input
pub fn text_id(field: TextField) -> &'static str {
    field.key()
}

/// Configuration view
pub struct ConfigView;

impl ConfigView {
    /// Render the page for `state` in `locale`
    pub fn render(state: &ConfigState, locale: Locale) -> PageView {
        let locale = locale.code();

        let Some(editor) = state.editor() else {
            return PageView::Loading {
                message: t!("camera.loading", locale = locale).to_string(),
            };
        };
        let buffer = editor.buffer();

        let toggle = |field: BoolField, label: String| FormRow {
            id: toggle_id(field),
            label,
            widget: Widget::Toggle {
                field,
                checked: buffer.flag(field),
            },
        };
        let text = |field: TextField, label: String| FormRow {
            id: text_id(field),
            label,
            widget: Widget::Text {
                field,
                value: buffer.text(field).to_string(),
            },
        };

        let rows = vec![
            toggle(BoolField::Enable, t!("camera.enable", locale = locale).to_string()),
            text(
                TextField::TickInterval,
                t!("camera.tick_interval", locale = locale).to_string(),
            ),
            text(
                TextField::CaptureFlags,
                t!("camera.capture_flags", locale = locale).to_string(),
            ),
            text(
                TextField::ImageDirectory,
                t!("camera.image_directory", locale = locale).to_string(),
            ),
            toggle(BoolField::Upload, t!("camera.upload", locale = locale).to_string()),
        ];

        let variant = if editor.is_dirty() {
            ButtonVariant::Danger
        } else {
            ButtonVariant::Success
        };

        PageView::Form(ConfigForm {
            rows,
            commit: CommitButton {
                id: COMMIT_BUTTON_ID,
                label: t!("camera.update", locale = locale).to_string(),
                variant,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::camera::CameraConfig;

    fn seed() -> CameraConfig {
        CameraConfig {
            enable: true,
            tick_interval: 10,
            capture_flags: "-n 3".to_string(),
            image_directory: "/var/img".to_string(),
            upload: false,
        }
    }

    fn form(state: &ConfigState) -> ConfigForm {
        match ConfigView::render(state, Locale::EnUS) {
            PageView::Form(form) => form,
            other => panic!("expected form, got {other:?}"),
        }
    }

    #[test]
    fn test_loading_placeholder() {
        let view = ConfigView::render(&ConfigState::Loading, Locale::EnUS);
        assert_eq!(
            view,
            PageView::Loading {
                message: "Loading...".to_string()
            }
        );
    }

    #[test]
    fn test_form_mirrors_seed() {
        let form = form(&ConfigState::from_record(Some(seed())));

        let ids: Vec<_> = form.rows.iter().map(|row| row.id).collect();
        assert_eq!(
            ids,
            vec!["camera_enable", "tick_interval", "capture_flags", "image_directory", "camera_gdrive"]
        );

        let widget = |id: &str| form.row(id).map(|row| row.widget.clone());
        assert_eq!(
            widget("camera_enable"),
            Some(Widget::Toggle { field: BoolField::Enable, checked: true })
        );
        assert_eq!(
            widget("tick_interval"),
            Some(Widget::Text { field: TextField::TickInterval, value: "10".to_string() })
        );
        assert_eq!(
            widget("capture_flags"),
            Some(Widget::Text { field: TextField::CaptureFlags, value: "-n 3".to_string() })
        );
        assert_eq!(
            widget("image_directory"),
            Some(Widget::Text { field: TextField::ImageDirectory, value: "/var/img".to_string() })
        );
        assert_eq!(
            widget("camera_gdrive"),
            Some(Widget::Toggle { field: BoolField::Upload, checked: false })
        );
        assert_eq!(form.row("tick_interval").map(|r| r.label.as_str()), Some("Tick Interval (in minutes)"));
    }

    #[test]
    fn test_commit_button_tracks_dirty_flag() {
        let mut state = ConfigState::from_record(Some(seed()));
        assert_eq!(form(&state).commit.variant, ButtonVariant::Danger);
        assert_eq!(form(&state).commit.id, COMMIT_BUTTON_ID);

        let updater = |_: CameraConfig| {};
        let notifier = |_: &str| {};
        state.handle(EditorEvent::Commit, &updater, &notifier);
        assert_eq!(form(&state).commit.variant, ButtonVariant::Success);

        let click = form(&state)
            .row("camera_enable")
            .and_then(|row| row.widget.click())
            .expect("toggle event");
        state.handle(click, &updater, &notifier);
        let form = form(&state);
        assert_eq!(form.commit.variant, ButtonVariant::Danger);
        assert_eq!(
            form.row("camera_enable").map(|row| row.widget.clone()),
            Some(Widget::Toggle { field: BoolField::Enable, checked: false })
        );
    }

    #[test]
    fn test_widget_events_carry_their_field() {
        let text = Widget::Text {
            field: TextField::ImageDirectory,
            value: String::new(),
        };
        assert_eq!(
            text.change("/tmp"),
            Some(EditorEvent::Text {
                field: TextField::ImageDirectory,
                value: "/tmp".to_string()
            })
        );
        assert_eq!(text.click(), None);

        let toggle = Widget::Toggle {
            field: BoolField::Upload,
            checked: true,
        };
        assert_eq!(toggle.change("x"), None);
    }

    #[test]
    fn test_labels_follow_locale() {
        let state = ConfigState::from_record(Some(seed()));
        let PageView::Form(form) = ConfigView::render(&state, Locale::ZhCN) else {
            panic!("expected form");
        };
        assert_eq!(form.commit.label, "更新");
    }
}

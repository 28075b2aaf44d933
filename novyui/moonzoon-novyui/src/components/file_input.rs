// FileInput Component
// Native file selection filtered through FileRules

use crate::tokens::*;
use novyui_shared::{CandidateFile, FileRules, FileSelection, ValueError};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use zoon::events::Change;
use zoon::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileInputVariant {
    Default,    // Field showing the selected file names
    Dropzone,   // Large dashed area
    Button,     // Button-style trigger
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileInputSize {
    Small,
    Medium,
    Large,
}

pub struct FileInputBuilder {
    variant: FileInputVariant,
    size: FileInputSize,
    rules: FileRules,
    disabled: bool,
    placeholder: Option<String>,
    on_change: Option<Rc<dyn Fn(Vec<CandidateFile>)>>,
    on_reject: Option<Rc<dyn Fn(Vec<ValueError>)>>,
}

impl FileInputBuilder {
    pub fn new() -> Self {
        Self {
            variant: FileInputVariant::Default,
            size: FileInputSize::Medium,
            rules: FileRules::default(),
            disabled: false,
            placeholder: None,
            on_change: None,
            on_reject: None,
        }
    }

    pub fn variant(mut self, variant: FileInputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: FileInputSize) -> Self {
        self.size = size;
        self
    }

    pub fn rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// MIME types (`image/*`) or extensions (`.pdf`)
    pub fn accept<I, S>(mut self, accept: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.accept = accept.into_iter().map(Into::into).collect();
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.rules.multiple = multiple;
        self
    }

    pub fn max_size(mut self, max_size: u64) -> Self {
        self.rules.max_size = Some(max_size);
        self
    }

    pub fn max_files(mut self, max_files: usize) -> Self {
        self.rules.max_files = Some(max_files);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Called with the accepted files of every selection
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(Vec<CandidateFile>) + 'static,
    {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// Called with the rejections when a selection contains any
    pub fn on_reject<F>(mut self, handler: F) -> Self
    where
        F: Fn(Vec<ValueError>) + 'static,
    {
        self.on_reject = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let selected = Mutable::new(Vec::<String>::new());
        let rejection = Mutable::new(None::<String>);
        let drag_active = Mutable::new(false);
        let disabled = self.disabled;
        let multiple = self.rules.multiple;
        let variant = self.variant;

        let placeholder = self.placeholder.clone().unwrap_or_else(|| {
            match (variant, multiple) {
                (FileInputVariant::Dropzone, _) => "Drag and drop files here, or click to select".to_string(),
                (FileInputVariant::Button, true) => "Select files".to_string(),
                (FileInputVariant::Button, false) => "Select file".to_string(),
                (FileInputVariant::Default, true) => "Choose files...".to_string(),
                (FileInputVariant::Default, false) => "Choose file...".to_string(),
            }
        });

        let trigger = match variant {
            FileInputVariant::Default => default_trigger(self.size, placeholder, selected.clone(), disabled).unify(),
            FileInputVariant::Dropzone => dropzone_trigger(self.size, placeholder, drag_active.clone(), disabled).unify(),
            FileInputVariant::Button => button_trigger(self.size, placeholder, disabled).unify(),
        };

        let accept_attribute = (!self.rules.accept.is_empty()).then(|| self.rules.accept_attribute());
        let intake = intake(self.rules, selected, rejection.clone(), self.on_change, self.on_reject);
        let native_input = native_input(accept_attribute, multiple, disabled, intake.clone());

        let picker = RawHtmlEl::new("label")
            .style("display", "flex")
            .style("width", "100%")
            .child(native_input)
            .child(trigger);
        let picker = if variant == FileInputVariant::Dropzone && !disabled {
            let listeners = drop_listeners(&picker.dom_element(), drag_active, intake);
            picker.after_remove(move |_| drop(listeners))
        } else {
            picker
        };

        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_4))
            .update_raw_el(move |raw_el| {
                raw_el.style("opacity", if disabled { OPACITY_DISABLED } else { OPACITY_ENABLED })
            })
            .item(picker)
            .item_signal(rejection.signal_cloned().map_some(|message| {
                El::new()
                    .s(Font::new().size(FONT_SIZE_12).color_signal(error()))
                    .update_raw_el(|raw_el| raw_el.attr("role", "alert"))
                    .child(message)
            }))
    }
}

/// Receives every picked or dropped batch
type Intake = Rc<dyn Fn(Vec<CandidateFile>)>;

/// Names to show and the first rejection message of a checked batch
fn summarize(selection: &FileSelection) -> (Vec<String>, Option<String>) {
    (
        selection.accepted.iter().map(|file| file.name.clone()).collect(),
        selection.rejected.first().map(ValueError::display_message),
    )
}

fn intake(
    rules: FileRules,
    selected: Mutable<Vec<String>>,
    rejection: Mutable<Option<String>>,
    on_change: Option<Rc<dyn Fn(Vec<CandidateFile>)>>,
    on_reject: Option<Rc<dyn Fn(Vec<ValueError>)>>,
) -> Intake {
    Rc::new(move |candidates| {
        let selection = rules.select(candidates);
        for rejected in &selection.rejected {
            zoon::eprintln!("File rejected: {rejected}");
        }
        let (names, first_rejection) = summarize(&selection);
        rejection.set(first_rejection);
        selected.set(names);

        if !selection.rejected.is_empty() {
            if let Some(on_reject) = &on_reject {
                on_reject(selection.rejected);
            }
        }
        if let Some(on_change) = &on_change {
            on_change(selection.accepted);
        }
    })
}

fn candidates(files: Option<web_sys::FileList>) -> Vec<CandidateFile> {
    files
        .map(|files| {
            (0..files.length())
                .filter_map(|index| files.get(index))
                .map(|file| CandidateFile::new(file.name(), file.type_(), file.size() as u64))
                .collect()
        })
        .unwrap_or_default()
}

fn native_input(
    accept_attribute: Option<String>,
    multiple: bool,
    disabled: bool,
    intake: Intake,
) -> RawHtmlEl<web_sys::HtmlElement> {
    let mut input = RawHtmlEl::new("input")
        .attr("type", "file")
        .style("display", "none");
    if let Some(accept_attribute) = &accept_attribute {
        input = input.attr("accept", accept_attribute);
    }
    if multiple {
        input = input.attr("multiple", "");
    }
    if disabled {
        input = input.attr("disabled", "");
    }

    let input_element = input.dom_element().dyn_into::<web_sys::HtmlInputElement>().ok();
    input.event_handler(move |_: Change| {
        let Some(input_element) = &input_element else {
            return;
        };
        let candidates = candidates(input_element.files());
        // Re-selecting the same file has to fire `change` again
        input_element.set_value("");
        intake(candidates);
    })
}

type DragListener = Closure<dyn FnMut(web_sys::DragEvent)>;

/// Dropped files go through the same intake as picked ones. The returned
/// closures must live as long as the element.
fn drop_listeners(target: &web_sys::HtmlElement, drag_active: Mutable<bool>, intake: Intake) -> Vec<DragListener> {
    let dragover = Closure::wrap(Box::new(clone!((drag_active) move |event: web_sys::DragEvent| {
        // Without this the browser opens the file instead of dropping it
        event.prevent_default();
        drag_active.set_neq(true);
    })) as Box<dyn FnMut(web_sys::DragEvent)>);

    let dragleave = Closure::wrap(Box::new(clone!((drag_active) move |_event: web_sys::DragEvent| {
        drag_active.set_neq(false);
    })) as Box<dyn FnMut(web_sys::DragEvent)>);

    let drop_files = Closure::wrap(Box::new(move |event: web_sys::DragEvent| {
        event.prevent_default();
        drag_active.set_neq(false);
        let files = event.data_transfer().and_then(|data_transfer| data_transfer.files());
        intake(candidates(files));
    }) as Box<dyn FnMut(web_sys::DragEvent)>);

    let listeners = [("dragover", dragover), ("dragleave", dragleave), ("drop", drop_files)];
    listeners
        .into_iter()
        .filter_map(|(event_type, listener)| {
            match target.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref()) {
                Ok(()) => Some(listener),
                Err(error) => {
                    zoon::eprintln!("Failed to listen for '{event_type}' on the dropzone: {error:?}");
                    None
                }
            }
        })
        .collect()
}

fn default_trigger(size: FileInputSize, placeholder: String, selected: Mutable<Vec<String>>, disabled: bool) -> impl Element {
    let (padding_x, padding_y, font_size) = match size {
        FileInputSize::Small => (SPACING_8, SPACING_6, FONT_SIZE_12),
        FileInputSize::Medium => (SPACING_12, SPACING_8, FONT_SIZE_14),
        FileInputSize::Large => (SPACING_16, SPACING_12, FONT_SIZE_16),
    };

    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(padding_x).y(padding_y))
        .s(Gap::new().x(SPACING_8))
        .s(Borders::all_signal(border_strong().map(|color| Border::new().width(1).color(color))))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Background::new().color_signal(if disabled {
            surface_muted().boxed_local()
        } else {
            surface_raised().boxed_local()
        }))
        .s(Cursor::new(if disabled { CursorIcon::NotAllowed } else { CursorIcon::Pointer }))
        .s(Align::new().center_y())
        .item(
            El::new()
                .s(Width::fill())
                .s(Font::new().size(font_size).color_signal(map_ref! {
                    let has_files = selected.signal_ref(|names| !names.is_empty()),
                    let text_color = text(),
                    let muted_color = text_muted() =>
                    if *has_files { *text_color } else { *muted_color }
                }))
                .child_signal(selected.signal_ref(move |names| match names.as_slice() {
                    [] => placeholder.clone(),
                    [name] => name.clone(),
                    names => format!("{} files selected", names.len()),
                }))
        )
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_14).color_signal(accent()))
                .child("Browse")
        )
}

fn dropzone_trigger(size: FileInputSize, placeholder: String, drag_active: Mutable<bool>, disabled: bool) -> impl Element {
    let (padding, font_size) = match size {
        FileInputSize::Small => (SPACING_16, FONT_SIZE_12),
        FileInputSize::Medium => (SPACING_24, FONT_SIZE_14),
        FileInputSize::Large => (SPACING_32, FONT_SIZE_16),
    };

    Column::new()
        .s(Width::fill())
        .s(Padding::all(padding))
        .s(Gap::new().y(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(map_ref! {
            let active = drag_active.signal(),
            let highlight = accent_subtle(),
            let idle = surface_muted() =>
            if *active { *highlight } else { *idle }
        }))
        .s(Cursor::new(if disabled { CursorIcon::NotAllowed } else { CursorIcon::Pointer }))
        .s(Align::center())
        .s(transition_colors())
        .update_raw_el(move |raw_el| {
            raw_el.style_signal("border", map_ref! {
                let active = drag_active.signal(),
                let highlight = accent(),
                let idle = border_strong() =>
                format!("2px dashed {}", if *active { *highlight } else { *idle })
            })
        })
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_20).color_signal(text_muted()))
                .child("⇪")
        )
        .item(
            El::new()
                .s(Font::new().size(font_size).color_signal(text_muted()).center())
                .child(placeholder)
        )
}

fn button_trigger(size: FileInputSize, placeholder: String, disabled: bool) -> impl Element {
    let (padding_x, padding_y, font_size) = match size {
        FileInputSize::Small => (SPACING_8, SPACING_4, FONT_SIZE_12),
        FileInputSize::Medium => (SPACING_16, SPACING_8, FONT_SIZE_14),
        FileInputSize::Large => (SPACING_20, SPACING_12, FONT_SIZE_16),
    };

    El::new()
        .s(Padding::new().x(padding_x).y(padding_y))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Background::new().color_signal(if disabled {
            text_disabled().boxed_local()
        } else {
            accent().boxed_local()
        }))
        .s(Font::new()
            .size(font_size)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(text_on_accent()))
        .s(Cursor::new(if disabled { CursorIcon::NotAllowed } else { CursorIcon::Pointer }))
        .s(transition_colors())
        .child(placeholder)
}

// Convenience functions
pub fn file_input() -> FileInputBuilder {
    FileInputBuilder::new()
}

pub fn file_dropzone() -> FileInputBuilder {
    FileInputBuilder::new().variant(FileInputVariant::Dropzone)
}

pub fn file_button() -> FileInputBuilder {
    FileInputBuilder::new().variant(FileInputVariant::Button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_batch_is_checked_like_a_picked_one() {
        let rules = FileRules {
            accept: vec![".pdf".to_string()],
            max_size: Some(1024),
            multiple: true,
            max_files: None,
        };
        let selection = rules.select(vec![
            CandidateFile::new("cv.pdf", "application/pdf", 512),
            CandidateFile::new("notes.txt", "text/plain", 10),
            CandidateFile::new("scan.pdf", "application/pdf", 4096),
        ]);
        let (names, first_rejection) = summarize(&selection);
        assert_eq!(names, vec!["cv.pdf".to_string()]);
        assert_eq!(selection.rejected.len(), 2);
        let message = first_rejection.unwrap();
        assert!(message.contains("notes.txt"), "{message}");
    }

    #[test]
    fn single_file_mode_keeps_the_first_dropped_file() {
        let rules = FileRules::default();
        let selection = rules.select(vec![
            CandidateFile::new("a.png", "image/png", 1),
            CandidateFile::new("b.png", "image/png", 1),
        ]);
        let (names, first_rejection) = summarize(&selection);
        assert_eq!(names, vec!["a.png".to_string()]);
        assert!(first_rejection.is_some_and(|message| message.contains("b.png")));
    }

    #[test]
    fn clean_batch_has_no_rejection() {
        let selection = FileRules::default().select(vec![CandidateFile::new("a.png", "image/png", 1)]);
        assert_eq!(summarize(&selection), (vec!["a.png".to_string()], None));
    }
}

// DateInput Component
// Day / month / year segments with an age window, disabled dates and quick actions

use crate::components::button::{button, ButtonSize, ButtonVariant};
use crate::components::date_input_picker::{calendar_popover, calendar_toggle};
use crate::components::segment_input::{segment_input, separator, SegmentHandlers, SegmentState};
use crate::tokens::*;
use novyui_shared::chrono::{Local, NaiveDate};
use novyui_shared::{
    AgeConstraint, DateChange, DateEditor, DateFieldConfig, DateValue, DisabledDateSet, Field,
    QuickAction, SegmentKey, TomorrowMode, ValueError,
};
use std::rc::Rc;
use zoon::*;

/// `(field_name, canonical_value)`, called on every edit
pub type ChangeHandler = Rc<dyn Fn(&str, &str)>;

pub(crate) fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct DateInputBuilder {
    label: Option<String>,
    name: String,
    description: Option<String>,
    required: bool,
    constraint: AgeConstraint,
    quick_actions: bool,
    disabled_dates: DisabledDateSet,
    tomorrow_mode: TomorrowMode,
    placeholders: Vec<(Field, String)>,
    value: Option<String>,
    today: Option<NaiveDate>,
    disabled: bool,
    calendar: bool,
    setup_error: Option<ValueError>,
    on_change: Option<ChangeHandler>,
}

impl DateInputBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            name: "date".to_string(),
            description: None,
            required: false,
            constraint: AgeConstraint::default(),
            quick_actions: true,
            disabled_dates: DisabledDateSet::new(),
            tomorrow_mode: TomorrowMode::default(),
            placeholders: Vec::new(),
            value: None,
            today: None,
            disabled: false,
            calendar: false,
            setup_error: None,
            on_change: None,
        }
    }

    /// Applies every prop a `DateFieldConfig` carries
    pub fn config(mut self, config: &DateFieldConfig) -> Self {
        self.name = config.name.clone();
        if !config.label.is_empty() {
            self.label = Some(config.label.clone());
        }
        self.required = config.required;
        self.constraint = config.age_constraint();
        self.quick_actions = config.quick_actions;
        self.tomorrow_mode = config.tomorrow_mode;
        self.value = config.default_value.clone();
        match config.disabled_date_set() {
            Ok(disabled_dates) => self.disabled_dates = disabled_dates,
            Err(error) => self.setup_error = Some(error),
        }
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Field name handed back with every change
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_age(mut self, min_age: u32) -> Self {
        self.constraint.min_age = Some(min_age);
        self
    }

    pub fn max_age(mut self, max_age: u32) -> Self {
        self.constraint.max_age = Some(max_age);
        self
    }

    pub fn quick_actions(mut self, quick_actions: bool) -> Self {
        self.quick_actions = quick_actions;
        self
    }

    pub fn disabled_dates(mut self, disabled_dates: DisabledDateSet) -> Self {
        self.disabled_dates = disabled_dates;
        self
    }

    pub fn tomorrow_mode(mut self, tomorrow_mode: TomorrowMode) -> Self {
        self.tomorrow_mode = tomorrow_mode;
        self
    }

    pub fn placeholder(mut self, field: Field, placeholder: impl Into<String>) -> Self {
        self.placeholders.retain(|(existing, _)| *existing != field);
        self.placeholders.push((field, placeholder.into()));
        self
    }

    /// Initial value as `YYYY-MM-DD`; partial values such as `1990--` work too
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Pins "today" instead of reading the local clock
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Adds the calendar popover (see `date_input_picker`)
    pub fn calendar(mut self, calendar: bool) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &str) + 'static,
    {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn build(mut self) -> impl Element {
        let label = self.label.take();
        let description = self.description.take();
        let required = self.required;
        let name = self.name.clone();

        let field = match self.control() {
            Ok(control) => control.render().unify(),
            Err(error) => {
                zoon::eprintln!("DateInput '{name}' is misconfigured: {error}");
                error_line(error.to_string()).unify()
            }
        };

        Column::new()
            .s(Gap::new().y(SPACING_4))
            .item(label.map(|label| field_label(label, required)))
            .item(field)
            .item(description.map(|description| {
                El::new()
                    .s(Font::new().size(FONT_SIZE_12).color_signal(text_muted()))
                    .child(description)
            }))
    }

    fn control(self) -> Result<DateControl, ValueError> {
        if let Some(error) = self.setup_error {
            return Err(error);
        }
        let today = self.today.unwrap_or_else(local_today);
        let mut editor = DateEditor::new(self.name, today, self.constraint)?
            .with_disabled(self.disabled_dates)
            .with_tomorrow_mode(self.tomorrow_mode);
        if let Some(value) = &self.value {
            editor = editor.with_value(DateValue::parse(value)?);
        }

        let placeholders = Field::DATE.map(|field| {
            self.placeholders
                .iter()
                .find(|(candidate, _)| *candidate == field)
                .map(|(_, placeholder)| placeholder.clone())
                .unwrap_or_else(|| field.placeholder().to_string())
        });

        Ok(DateControl::new(
            editor,
            self.today,
            placeholders,
            self.quick_actions,
            self.calendar,
            self.disabled,
            self.on_change,
        ))
    }
}

/// Live state of one rendered date field. Clones share the same state.
#[derive(Clone)]
pub(crate) struct DateControl {
    editor: Mutable<DateEditor>,
    segments: SegmentState,
    today: Option<NaiveDate>,
    placeholders: Rc<[String; 3]>,
    quick_actions: bool,
    calendar: bool,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl DateControl {
    fn new(
        editor: DateEditor,
        today: Option<NaiveDate>,
        placeholders: [String; 3],
        quick_actions: bool,
        calendar: bool,
        disabled: bool,
        on_change: Option<ChangeHandler>,
    ) -> Self {
        let control = Self {
            editor: Mutable::new(editor),
            segments: SegmentState::new(&Field::DATE),
            today,
            placeholders: Rc::new(placeholders),
            quick_actions,
            calendar,
            disabled,
            on_change,
        };
        control.refresh();
        control
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(local_today)
    }

    pub(crate) fn editor(&self) -> &Mutable<DateEditor> {
        &self.editor
    }

    pub(crate) fn input(&self, field: Field, raw: String) {
        let (change, error) = {
            let mut editor = self.editor.lock_mut();
            let before = editor.error().map(ToString::to_string);
            let change = editor.input(field, &raw);
            let after = editor.error().map(ToString::to_string);
            (change, after.filter(|after| Some(after) != before.as_ref()))
        };
        if let Some(error) = error {
            zoon::println!("{}: {error}", change.name);
        }
        self.segments.show(field, change.text.clone());
        self.segments.request_focus(change.focus);
        self.emit(&change);
    }

    fn focus(&self, field: Field) {
        self.editor.lock_mut().focus(field);
        self.segments.focus.set_neq(Some(field));
    }

    fn blur(&self, field: Field) {
        let change = self.editor.lock_mut().finish(field);
        self.segments.release_focus(field);
        if let Some(change) = change {
            self.segments.show(field, change.text.clone());
            self.emit(&change);
        }
    }

    fn key(&self, field: Field, key: SegmentKey, caret: Option<usize>) {
        let target = self.editor.lock_mut().key(field, key, caret);
        self.segments.request_focus(target);
    }

    pub(crate) fn quick_action(&self, action: QuickAction) {
        let change = self.editor.lock_mut().quick_action(action, self.today());
        self.refresh();
        self.emit(&change);
    }

    /// Selects a whole date; returns `false` when the date is not selectable
    pub(crate) fn pick(&self, date: NaiveDate) -> bool {
        let result = self.editor.lock_mut().pick(date);
        match result {
            Ok(change) => {
                self.refresh();
                self.emit(&change);
                true
            }
            Err(error) => {
                zoon::println!("{}: {error}", self.editor.lock_ref().name());
                false
            }
        }
    }

    fn refresh(&self) {
        let editor = self.editor.lock_ref();
        for field in Field::DATE {
            self.segments.show(field, editor.value().get(field));
        }
    }

    fn emit(&self, change: &DateChange) {
        if let Some(on_change) = &self.on_change {
            on_change(&change.name, &change.value);
        }
    }

    fn handlers(&self) -> SegmentHandlers {
        let (on_input, on_focus, on_blur, on_key) = (self.clone(), self.clone(), self.clone(), self.clone());
        SegmentHandlers {
            on_input: Rc::new(move |field, raw| on_input.input(field, raw)),
            on_focus: Rc::new(move |field| on_focus.focus(field)),
            on_blur: Rc::new(move |field| on_blur.blur(field)),
            on_key: Rc::new(move |field, key, caret| on_key.key(field, key, caret)),
        }
    }

    fn invalid_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.editor.signal_ref(|editor| editor.error().is_some())
    }

    pub(crate) fn render(self) -> impl Element {
        let handlers = self.handlers();
        let is_open = Mutable::new(false);
        let disabled = self.disabled;

        let mut segments = Row::new()
            .s(Padding::new().x(SPACING_8).y(SPACING_4))
            .s(Gap::new().x(SPACING_2))
            .s(Align::new().center_y())
            .s(RoundedCorners::all(CORNER_RADIUS_4))
            .s(Background::new().color_signal(if disabled {
                surface_muted().boxed_local()
            } else {
                surface_raised().boxed_local()
            }))
            .s(Borders::all_signal(map_ref! {
                let invalid = self.invalid_signal(),
                let focused = self.segments.focus.signal_ref(Option::is_some),
                let idle = border_strong(),
                let active = accent(),
                let failed = error() => {
                    let color = if *invalid { *failed } else if *focused { *active } else { *idle };
                    Border::new().width(1).color(color)
                }
            }))
            .s(transition_colors())
            .update_raw_el(|raw_el| raw_el.attr("role", "group"));

        for (index, field) in Field::DATE.into_iter().enumerate() {
            if index > 0 {
                segments = segments.item(separator("/"));
            }
            segments = segments.item(segment_input(
                field,
                self.placeholders[index].clone(),
                &self.segments,
                &handlers,
                self.invalid_signal(),
                disabled,
            ));
        }

        let field_row = if self.calendar && !disabled {
            let control = self.clone();
            segments
                .item(calendar_toggle(&is_open))
                .element_below_signal(is_open.signal().map_true(clone!((is_open) move || {
                    calendar_popover(&control, &is_open)
                })))
                .on_click_outside(clone!((is_open) move || is_open.set(false)))
                .unify()
        } else {
            segments.unify()
        };

        let quick_actions = (self.quick_actions && !disabled).then(|| {
            Row::new()
                .s(Gap::new().x(SPACING_4))
                .items(QuickAction::DATE.map(|action| {
                    let control = self.clone();
                    button(action.label())
                        .variant(ButtonVariant::Ghost)
                        .size(ButtonSize::Small)
                        .on_press(move || control.quick_action(action))
                        .build()
                }))
        });

        let name = self.editor.lock_ref().name().to_string();
        let form_value = RawHtmlEl::new("input")
            .attr("type", "hidden")
            .attr("name", &name)
            .attr_signal("value", self.editor.signal_ref(|editor| editor.canonical()));

        Column::new()
            .s(Gap::new().y(SPACING_4))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .s(Align::new().center_y())
                    .item(field_row)
                    .item(quick_actions)
            )
            .item(form_value)
            .item_signal(self.editor.signal_ref(|editor| editor.error_message()).map_some(error_line))
    }
}

pub(crate) fn field_label(label: String, required: bool) -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_2))
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(text()))
        .item(label)
        .item(required.then(|| {
            El::new()
                .s(Font::new().color_signal(error()))
                .update_raw_el(|raw_el| raw_el.attr("aria-hidden", "true"))
                .child("*")
        }))
}

pub(crate) fn error_line(message: String) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_12).color_signal(error()))
        .update_raw_el(|raw_el| raw_el.attr("role", "alert"))
        .child(message)
}

// Convenience function
pub fn date_input() -> DateInputBuilder {
    DateInputBuilder::new()
}

// DateTimePicker Component
// DateInputPicker and TimePicker side by side, emitting one ISO datetime

use crate::components::date_input::{field_label, ChangeHandler, DateInputBuilder};
use crate::components::date_input_picker::date_input_picker;
use crate::components::time_picker::{time_picker, TimePickerBuilder};
use crate::tokens::*;
use novyui_shared::{combine, DateFieldConfig, DateValue};
use std::rc::Rc;
use zoon::*;

pub struct DateTimePickerBuilder {
    label: Option<String>,
    name: String,
    required: bool,
    value: Option<String>,
    date: DateInputBuilder,
    time: TimePickerBuilder,
    on_change: Option<ChangeHandler>,
}

impl DateTimePickerBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            name: "datetime".to_string(),
            required: false,
            value: None,
            date: date_input_picker(),
            time: time_picker(),
            on_change: None,
        }
    }

    /// Date props go to the date half, hour cycle and seconds to the time half
    pub fn config(mut self, config: &DateFieldConfig) -> Self {
        self.name = config.name.clone();
        if !config.label.is_empty() {
            self.label = Some(config.label.clone());
        }
        self.required = config.required;
        let mut date_config = config.clone();
        date_config.label = String::new();
        date_config.default_value = None;
        self.date = self.date.config(&date_config);
        self.time = self.time.config(&date_config);
        if let Some(value) = &config.default_value {
            self = self.value(value.clone());
        }
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Initial value as `YYYY-MM-DDTHH:MM[:SS]`
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn date(mut self, configure: impl FnOnce(DateInputBuilder) -> DateInputBuilder) -> Self {
        self.date = configure(self.date);
        self
    }

    pub fn time(mut self, configure: impl FnOnce(TimePickerBuilder) -> TimePickerBuilder) -> Self {
        self.time = configure(self.time);
        self
    }

    /// Called with `(name, "YYYY-MM-DDTHH:MM[:SS]")` whenever either half changes
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &str) + 'static,
    {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// Date and time halves the picker starts with, both in canonical form
    fn initial_parts(&self) -> (String, String) {
        match self.value.as_deref().and_then(|value| value.split_once('T')) {
            Some((date, time)) => (date.to_string(), time.to_string()),
            None => (DateValue::empty().canonical(), self.time.empty_value()),
        }
    }

    pub fn build(self) -> impl Element {
        let (date_text, time_text) = self.initial_parts();
        if let Some(value) = self.value.as_deref().filter(|value| !value.contains('T')) {
            zoon::eprintln!("DateTimePicker '{}': '{value}' has no time part", self.name);
        }

        let date_value = Mutable::new(date_text.clone());
        let time_value = Mutable::new(time_text.clone());
        let name: Rc<str> = self.name.clone().into();
        let emit = {
            let (date_value, time_value) = (date_value.clone(), time_value.clone());
            let on_change = self.on_change.clone();
            Rc::new(move || {
                if let Some(on_change) = &on_change {
                    on_change(&name, &combine(&date_value.lock_ref(), &time_value.lock_ref()));
                }
            })
        };

        let date = self
            .date
            .name(format!("{}_date", self.name))
            .value(date_text)
            .on_change(clone!((date_value, emit) move |_, value| {
                date_value.set_neq(value.to_string());
                emit();
            }));
        let mut time = self
            .time
            .name(format!("{}_time", self.name))
            .on_change(clone!((time_value, emit) move |_, value| {
                time_value.set_neq(value.to_string());
                emit();
            }));
        if self.value.is_some() {
            time = time.value(time_text);
        }

        let form_value = RawHtmlEl::new("input")
            .attr("type", "hidden")
            .attr("name", &self.name)
            .attr_signal("value", map_ref! {
                let date = date_value.signal_cloned(),
                let time = time_value.signal_cloned() =>
                combine(date, time)
            });

        Column::new()
            .s(Gap::new().y(SPACING_4))
            .item(self.label.map(|label| field_label(label, self.required)))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_12))
                    .s(Align::new().top())
                    .multiline()
                    .item(date.build())
                    .item(time.build())
            )
            .item(form_value)
    }
}

// Convenience function
pub fn date_time_picker() -> DateTimePickerBuilder {
    DateTimePickerBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_value_has_the_time_shape_of_the_picker() {
        let (date, time) = date_time_picker().initial_parts();
        assert_eq!(combine(&date, &time), "--T:");

        let (date, time) = date_time_picker().time(|time| time.with_seconds(true)).initial_parts();
        assert_eq!(combine(&date, &time), "--T::");
    }

    #[test]
    fn initial_value_is_split_at_the_t() {
        let picker = date_time_picker().value("2024-05-01T09:30:15");
        assert_eq!(picker.initial_parts(), ("2024-05-01".to_string(), "09:30:15".to_string()));
    }

    #[test]
    fn config_seconds_reach_the_time_half() {
        let mut config = DateFieldConfig::new("meeting");
        config.show_seconds = true;
        let (_, time) = date_time_picker().config(&config).initial_parts();
        assert_eq!(time, "::");
    }
}

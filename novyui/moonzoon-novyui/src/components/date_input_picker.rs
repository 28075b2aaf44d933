// DateInputPicker Component
// DateInput with a month calendar popover

use crate::components::date_input::{DateControl, DateInputBuilder};
use crate::tokens::*;
use novyui_shared::chrono::NaiveDate;
use novyui_shared::{shift_month, DayCell, MonthGrid, WEEKDAY_LABELS};
use zoon::events::KeyDown;
use zoon::*;

const CELL_SIZE: u32 = 32;

pub(crate) fn calendar_toggle(is_open: &Mutable<bool>) -> impl Element + use<> {
    let is_open = is_open.clone();
    El::new()
        .s(Padding::new().x(SPACING_4))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Font::new().size(FONT_SIZE_14).color_signal(map_ref! {
            let open = is_open.signal(),
            let active = accent(),
            let idle = text_muted() =>
            if *open { *active } else { *idle }
        }))
        .update_raw_el(clone!((is_open) move |raw_el| {
            raw_el
                .attr("role", "button")
                .attr("aria-label", "Open calendar")
                .attr_signal("aria-expanded", is_open.signal().map(|open| open.to_string()))
        }))
        .child("▦")
        .on_click(move || is_open.set_neq(!is_open.get()))
}

pub(crate) fn calendar_popover(control: &DateControl, is_open: &Mutable<bool>) -> impl Element + use<> {
    let today = control.today();
    let editor = control.editor().clone();
    let initial = editor.lock_ref().value().to_date().unwrap_or(today);
    let anchor = Mutable::new(initial);

    let grid = map_ref! {
        let anchor = anchor.signal(),
        let selected = editor.signal_ref(|editor| editor.value().to_date()) => {
            let editor = editor.lock_ref();
            MonthGrid::new(*anchor, today, *selected, |date| editor.is_selectable(date))
        }
    };

    let header = Row::new()
        .s(Width::fill())
        .s(Align::new().center_y())
        .item(month_step("‹", "Previous month", &anchor, -1))
        .item(
            El::new()
                .s(Width::fill())
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                    .color_signal(text())
                    .center())
                .child_signal(anchor.signal().map(|anchor| anchor.format("%B %Y").to_string()))
        )
        .item(month_step("›", "Next month", &anchor, 1));

    let weekday_labels = Row::new().items(WEEKDAY_LABELS.map(|label| {
        El::new()
            .s(Width::exact(CELL_SIZE))
            .s(Font::new().size(FONT_SIZE_12).color_signal(text_muted()).center())
            .child(label)
    }));

    let control = control.clone();
    let is_open = is_open.clone();

    Column::new()
        .s(Transform::new().move_down(4))
        .s(Padding::all(SPACING_8))
        .s(Gap::new().y(SPACING_4))
        .s(Background::new().color_signal(surface_raised()))
        .s(Borders::all_signal(border().map(|color| Border::new().width(1).color(color))))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Shadows::new([Shadow::new().y(4).blur(12).spread(-2).color("oklch(20% 0.05 255 / 0.2)")]))
        .update_raw_el(clone!((is_open) move |raw_el| {
            raw_el
                .attr("role", "dialog")
                .attr("aria-label", "Choose date")
                .style("z-index", Z_INDEX_POPOVER)
                .global_event_handler(move |event: KeyDown| {
                    if event.key() == "Escape" {
                        is_open.set(false);
                    }
                })
        }))
        .item(header)
        .item(weekday_labels)
        .item(
            Column::new()
                .items_signal_vec(grid.map(|grid| grid.weeks).to_signal_vec().map(move |week| {
                    Row::new().items(week.map(|cell| day_cell(cell, &control, &is_open)))
                }))
        )
}

fn month_step(symbol: &'static str, label: &'static str, anchor: &Mutable<NaiveDate>, delta: i32) -> impl Element + use<> {
    let anchor = anchor.clone();
    El::new()
        .s(Width::exact(CELL_SIZE))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Font::new().size(FONT_SIZE_16).color_signal(text()).center())
        .update_raw_el(move |raw_el| raw_el.attr("role", "button").attr("aria-label", label))
        .child(symbol)
        .on_click(move || {
            anchor.replace_with(|anchor| shift_month(*anchor, delta));
        })
}

fn day_cell(cell: DayCell, control: &DateControl, is_open: &Mutable<bool>) -> impl Element + use<> {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    let color = if cell.selected {
        text_on_accent().boxed_local()
    } else if cell.selectable {
        text().boxed_local()
    } else {
        text_disabled().boxed_local()
    };
    let background = map_ref! {
        let hovered = hovered_signal,
        let selected_color = accent(),
        let hover_color = surface_muted() =>
        if cell.selected {
            *selected_color
        } else if *hovered && cell.selectable {
            *hover_color
        } else {
            TRANSPARENT
        }
    };
    let ring = accent_subtle().map(move |color| {
        Border::new().width(1).color(if cell.today { color } else { TRANSPARENT })
    });

    let control = control.clone();
    let is_open = is_open.clone();
    El::new()
        .s(Width::exact(CELL_SIZE))
        .s(Height::exact(CELL_SIZE))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Font::new()
            .size(FONT_SIZE_14)
            .color_signal(color)
            .center()
            .line(if cell.selectable || !cell.in_month {
                FontLine::new()
            } else {
                FontLine::new().strike()
            }))
        .s(Background::new().color_signal(background))
        .s(Borders::all_signal(ring))
        .s(Cursor::new(if cell.selectable { CursorIcon::Pointer } else { CursorIcon::NotAllowed }))
        .s(Align::center())
        .update_raw_el(move |raw_el| {
            let raw_el = raw_el
                .attr("role", "gridcell")
                .attr("data-date", &cell.date.to_string());
            if cell.selectable { raw_el } else { raw_el.attr("aria-disabled", "true") }
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .child((cell.in_month || cell.selectable).then(|| cell.date.format("%-d").to_string()))
        .on_click(move || {
            if cell.selectable && control.pick(cell.date) {
                is_open.set(false);
            }
        })
}

// Convenience function
pub fn date_input_picker() -> DateInputBuilder {
    DateInputBuilder::new().calendar(true)
}

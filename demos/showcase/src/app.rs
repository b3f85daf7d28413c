//! The showcase window: one registry of every themed widget, a theme
//! manager applying the active spec, and an egui rendering pass that
//! reads the style state back out of each widget.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, RichText};
use neontron_theme::manager::ThemeManager;
use neontron_theme::mode::Mode;
use neontron_theme::registry::WidgetRegistry;
use neontron_theme::spec::ThemeSpec;
use neontron_theme::widget::Configurable;
use neontron_widgets::button::Button;
use neontron_widgets::checkbox::CheckBox;
use neontron_widgets::combo_box::ComboBox;
use neontron_widgets::entry::Entry;
use neontron_widgets::frame::Frame;
use neontron_widgets::label::Label;
use neontron_widgets::option_menu::OptionMenu;
use neontron_widgets::progress::ProgressBar;
use neontron_widgets::radio_button::RadioButton;
use neontron_widgets::scrollbar::Scrollbar;
use neontron_widgets::segmented_button::SegmentedButton;
use neontron_widgets::slider::Slider;
use neontron_widgets::switch::Switch;
use neontron_widgets::textbox::TextBox;
use neontron_widgets::window::Window;
use peniko::Color;

use crate::paint;

const INFO_TEXT: &str = "NeonTron Theme v1.0\n\
    A neon cyan theme with light and dark appearance modes.\n\
    Toggle the switch in the header to restyle every widget live.";

/// The whole gallery: theme state plus typed handles into the registry.
pub struct ShowcaseApp {
    manager: ThemeManager,
    registry: WidgetRegistry,

    window: Rc<RefCell<Window>>,
    section_frame: Rc<RefCell<Frame>>,
    title_label: Rc<RefCell<Label>>,
    mode_label: Rc<RefCell<Label>>,
    mode_switch: Rc<RefCell<Switch>>,

    normal_button: Rc<RefCell<Button>>,
    small_button: Rc<RefCell<Button>>,
    disabled_button: Rc<RefCell<Button>>,

    entry: Rc<RefCell<Entry>>,
    option_menu: Rc<RefCell<OptionMenu>>,
    combo_box: Rc<RefCell<ComboBox>>,

    checkboxes: Vec<Rc<RefCell<CheckBox>>>,
    radios: Vec<Rc<RefCell<RadioButton>>>,
    radio_selected: i32,

    progress_bars: Vec<Rc<RefCell<ProgressBar>>>,
    sliders: Vec<Rc<RefCell<Slider>>>,

    switches: Vec<Rc<RefCell<Switch>>>,

    segmented: Rc<RefCell<SegmentedButton>>,
    nested_frame: Rc<RefCell<Frame>>,
    nested_label: Rc<RefCell<Label>>,

    form_name: Rc<RefCell<Entry>>,
    form_password: Rc<RefCell<Entry>>,
    submit_button: Rc<RefCell<Button>>,
    status_buttons: Vec<Rc<RefCell<Button>>>,
    info_box: Rc<RefCell<TextBox>>,
    info_scrollbar: Rc<RefCell<Scrollbar>>,
}

/// Register a widget and keep a typed handle for rendering. The
/// registry holds the type-erased clone the applier works through.
fn register<W: Configurable + 'static>(
    registry: &mut WidgetRegistry,
    widget: W,
) -> Rc<RefCell<W>> {
    let handle = Rc::new(RefCell::new(widget));
    registry.register(handle.clone());
    handle
}

impl ShowcaseApp {
    /// Build the gallery, apply the theme once and set the toolkit mode.
    pub fn new(ctx: &egui::Context, spec: ThemeSpec, mode: Mode) -> Self {
        let manager = ThemeManager::new(spec, mode);
        let mut registry = WidgetRegistry::new();

        let window = register(&mut registry, Window::new("NeonTron Theme Showcase"));
        let section_frame = register(&mut registry, Frame::new());
        let title_label = register(
            &mut registry,
            Label::new("NeonTron Theme Showcase").with_font_size(24.0),
        );
        let mode_label = register(
            &mut registry,
            Label::new(format!("Current Mode: {}", mode_name(mode))),
        );
        let mode_switch = register(
            &mut registry,
            Switch::new("Dark Mode").with_on(mode.is_dark()),
        );

        let normal_button = register(&mut registry, Button::new("Normal Button"));
        let small_button = register(
            &mut registry,
            Button::new("Small Button").with_font_size(11.0),
        );
        let disabled_button = register(
            &mut registry,
            Button::new("Disabled Button").with_disabled(true),
        );

        let entry = register(
            &mut registry,
            Entry::new().with_placeholder("Type something..."),
        );
        let option_menu = register(
            &mut registry,
            OptionMenu::new(["Menu Option 1", "Menu Option 2", "Menu Option 3"]),
        );
        let combo_box = register(
            &mut registry,
            ComboBox::new(["Choice 1", "Choice 2", "Choice 3"]),
        );

        let checkboxes = vec![
            register(&mut registry, CheckBox::new("Option A").with_checked(true)),
            register(&mut registry, CheckBox::new("Option B")),
            register(
                &mut registry,
                CheckBox::new("Disabled Option").with_disabled(true),
            ),
        ];
        let radios = vec![
            register(&mut registry, RadioButton::new("Radio 1", 1)),
            register(&mut registry, RadioButton::new("Radio 2", 2)),
            register(&mut registry, RadioButton::new("Radio 3", 3)),
        ];

        let progress_bars = vec![
            register(&mut registry, ProgressBar::new(0.3)),
            register(&mut registry, ProgressBar::new(0.6)),
            register(&mut registry, ProgressBar::new(0.9)),
        ];
        let sliders = vec![
            register(&mut registry, Slider::new(0.0, 100.0, 25.0)),
            register(&mut registry, Slider::new(0.0, 100.0, 75.0)),
        ];

        let switches = vec![
            register(&mut registry, Switch::new("Notifications").with_on(true)),
            register(&mut registry, Switch::new("Auto-save")),
            register(
                &mut registry,
                Switch::new("Telemetry").with_disabled(true),
            ),
        ];

        let segmented = register(
            &mut registry,
            SegmentedButton::new(["Tab 1", "Tab 2", "Tab 3"]).with_selected(1),
        );
        let nested_frame = register(&mut registry, Frame::new().with_nested(true));
        let nested_label = register(&mut registry, Label::new("Content inside a nested frame"));

        let form_name = register(&mut registry, Entry::new().with_placeholder("Username"));
        let form_password = register(
            &mut registry,
            Entry::new().with_placeholder("Password").with_password(true),
        );
        let submit_button = register(&mut registry, Button::new("Submit"));

        // Custom fills; the first theme pass overwrites them.
        let status_buttons = vec![
            register(
                &mut registry,
                Button::new("Success")
                    .with_fg_color(Color::from_rgb8(0x2e, 0xcc, 0x71))
                    .with_hover_color(Color::from_rgb8(0x27, 0xae, 0x60)),
            ),
            register(
                &mut registry,
                Button::new("Warning")
                    .with_fg_color(Color::from_rgb8(0xf3, 0x9c, 0x12))
                    .with_hover_color(Color::from_rgb8(0xe6, 0x7e, 0x22)),
            ),
            register(
                &mut registry,
                Button::new("Error")
                    .with_fg_color(Color::from_rgb8(0xe7, 0x4c, 0x3c))
                    .with_hover_color(Color::from_rgb8(0xc0, 0x39, 0x2b)),
            ),
        ];
        let info_box = register(
            &mut registry,
            TextBox::new().with_text(INFO_TEXT).with_read_only(true),
        );
        let info_scrollbar = register(&mut registry, Scrollbar::new());

        let app = Self {
            manager,
            registry,
            window,
            section_frame,
            title_label,
            mode_label,
            mode_switch,
            normal_button,
            small_button,
            disabled_button,
            entry,
            option_menu,
            combo_box,
            checkboxes,
            radios,
            radio_selected: 1,
            progress_bars,
            sliders,
            switches,
            segmented,
            nested_frame,
            nested_label,
            form_name,
            form_password,
            submit_button,
            status_buttons,
            info_box,
            info_scrollbar,
        };

        ctx.set_theme(egui_theme(mode));
        app.manager.apply_to_all(&app.registry);
        log::info!(
            "showcase ready: {} widgets registered, starting in {} mode",
            app.registry.len(),
            mode_name(mode)
        );
        app
    }

    fn toggle_mode(&mut self, ctx: &egui::Context) {
        let mode = self.manager.toggle_mode();
        ctx.set_theme(egui_theme(mode));
        self.mode_label
            .borrow_mut()
            .set_text(format!("Current Mode: {}", mode_name(mode)));
        self.manager.apply_to_all(&self.registry);
    }

    fn header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            themed_label(ui, &self.title_label);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggled = {
                    let switch = self.mode_switch.borrow();
                    let mut on = switch.on();
                    let response = paint::toggle_switch(ui, &mut on, &switch);
                    drop(switch);
                    if response.changed() {
                        *self.mode_switch.borrow_mut().on_mut() = on;
                        true
                    } else {
                        false
                    }
                };
                themed_label(ui, &self.mode_label);
                if toggled {
                    self.toggle_mode(ctx);
                }
            });
        });
    }

    fn buttons_section(&self, ui: &mut egui::Ui) {
        self.section(ui, "Buttons", |ui| {
            ui.horizontal(|ui| {
                themed_button(ui, &self.normal_button);
                themed_button(ui, &self.small_button);
                themed_button(ui, &self.disabled_button);
            });
        });
    }

    fn input_section(&self, ui: &mut egui::Ui) {
        self.section(ui, "Input", |ui| {
            ui.horizontal(|ui| {
                themed_entry(ui, &self.entry, 200.0);
                themed_option_menu(ui, &self.option_menu);
                themed_combo_box(ui, &self.combo_box);
            });
        });
    }

    fn selection_section(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.radio_selected;
        self.section(ui, "Selection", |ui| {
            ui.horizontal(|ui| {
                for checkbox in &self.checkboxes {
                    themed_checkbox(ui, checkbox);
                }
            });
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for radio in &self.radios {
                    themed_radio(ui, radio, &mut selected);
                }
            });
        });
        self.radio_selected = selected;
    }

    fn controls_section(&self, ui: &mut egui::Ui) {
        self.section(ui, "Progress & Sliders", |ui| {
            ui.horizontal(|ui| {
                for bar in &self.progress_bars {
                    themed_progress(ui, bar);
                }
            });
            ui.add_space(6.0);
            for slider in &self.sliders {
                themed_slider(ui, slider);
            }
        });
    }

    fn switches_section(&self, ui: &mut egui::Ui) {
        self.section(ui, "Switches", |ui| {
            ui.horizontal(|ui| {
                for switch in &self.switches {
                    let changed = {
                        let borrowed = switch.borrow();
                        let mut on = borrowed.on();
                        let text_color = if borrowed.disabled() {
                            borrowed.style().text_color_disabled
                        } else {
                            borrowed.style().text_color
                        };
                        ui.label(
                            RichText::new(borrowed.text().to_string()).color(paint::color32_or(
                                text_color,
                                ui.visuals().text_color(),
                            )),
                        );
                        let response = paint::toggle_switch(ui, &mut on, &borrowed);
                        drop(borrowed);
                        response.changed().then_some(on)
                    };
                    if let Some(on) = changed {
                        *switch.borrow_mut().on_mut() = on;
                    }
                    ui.add_space(12.0);
                }
            });
        });
    }

    fn display_section(&self, ui: &mut egui::Ui) {
        self.section(ui, "Display", |ui| {
            themed_segmented(ui, &self.segmented);
            ui.add_space(6.0);
            let nested = self.nested_frame.borrow();
            paint::styled_frame(nested.style(), nested.fill()).show(ui, |ui| {
                themed_label(ui, &self.nested_label);
            });
        });
    }

    fn advanced_section(&self, ui: &mut egui::Ui) {
        self.section(ui, "Advanced", |ui| {
            ui.horizontal(|ui| {
                themed_entry(ui, &self.form_name, 140.0);
                themed_entry(ui, &self.form_password, 140.0);
                if themed_button(ui, &self.submit_button) {
                    log::info!(
                        "form submitted for user {:?}",
                        self.form_name.borrow().text()
                    );
                }
            });
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for button in &self.status_buttons {
                    themed_button(ui, button);
                }
            });
            ui.add_space(6.0);
            themed_textbox(ui, &self.info_box, &self.info_scrollbar);
        });
    }

    /// One titled gallery section inside the shared section frame style.
    fn section(&self, ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        let frame = {
            let section = self.section_frame.borrow();
            paint::styled_frame(section.style(), section.fill())
        };
        frame.show(ui, |ui| {
            ui.strong(title);
            ui.add_space(4.0);
            add_contents(ui);
        });
        ui.add_space(8.0);
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let background = paint::color32_or(
            self.window.borrow().style().fg_color,
            ctx.style().visuals.panel_fill,
        );
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .fill(background)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                self.header(ui, ctx);
                ui.add_space(10.0);
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.buttons_section(ui);
                    self.input_section(ui);
                    self.selection_section(ui);
                    self.controls_section(ui);
                    self.switches_section(ui);
                    self.display_section(ui);
                    self.advanced_section(ui);
                });
            });
    }
}

fn mode_name(mode: Mode) -> &'static str {
    if mode.is_dark() {
        "Dark"
    } else {
        "Light"
    }
}

fn egui_theme(mode: Mode) -> egui::Theme {
    if mode.is_dark() {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    }
}

fn themed_label(ui: &mut egui::Ui, label: &Rc<RefCell<Label>>) {
    let (text, font_size, style) = {
        let label = label.borrow();
        (
            label.text().to_string(),
            label.font_size(),
            label.style().clone(),
        )
    };
    let mut rich = RichText::new(text).color(paint::color32_or(
        style.text_color,
        ui.visuals().text_color(),
    ));
    if let Some(size) = font_size {
        rich = rich.size(size);
    }
    if let Some(fill) = style.fg_color.filter(|c| *c != Color::TRANSPARENT) {
        rich = rich.background_color(paint::color32(fill));
    }
    ui.label(rich);
}

/// Returns whether the button was clicked.
fn themed_button(ui: &mut egui::Ui, button: &Rc<RefCell<Button>>) -> bool {
    let (text, font_size, disabled, style) = {
        let button = button.borrow();
        (
            button.text().to_string(),
            button.font_size(),
            button.disabled(),
            button.style().clone(),
        )
    };
    let fill = if disabled {
        style.fg_color_disabled.or(style.fg_color)
    } else {
        style.fg_color
    };
    let text_color = if disabled {
        style.text_color_disabled.or(style.text_color)
    } else {
        style.text_color
    };

    let mut rich =
        RichText::new(text).color(paint::color32_or(text_color, Color32::BLACK));
    if let Some(size) = font_size {
        rich = rich.size(size);
    }
    let widget = egui::Button::new(rich)
        .fill(paint::color32_or(fill, ui.visuals().widgets.inactive.bg_fill))
        .corner_radius(paint::corner_radius(style.corner_radius));

    let response = ui.add_enabled(!disabled, widget);
    if response.hovered() {
        if let Some(hover) = style.hover_color {
            ui.painter().rect_filled(
                response.rect,
                paint::corner_radius(style.corner_radius),
                paint::color32(hover).gamma_multiply(0.35),
            );
        }
    }
    response.clicked()
}

fn themed_entry(ui: &mut egui::Ui, entry: &Rc<RefCell<Entry>>, width: f32) {
    let (mut text, placeholder, password, style) = {
        let entry = entry.borrow();
        (
            entry.text().to_string(),
            entry.placeholder().map(str::to_string),
            entry.password(),
            entry.style().clone(),
        )
    };
    let mut edit = egui::TextEdit::singleline(&mut text)
        .password(password)
        .desired_width(width)
        .text_color(paint::color32_or(
            style.text_color,
            ui.visuals().text_color(),
        ))
        .background_color(paint::color32_or(
            style.fg_color,
            ui.visuals().extreme_bg_color,
        ));
    if let Some(hint) = placeholder {
        edit = edit.hint_text(RichText::new(hint).color(paint::color32_or(
            style.placeholder_text_color,
            ui.visuals().weak_text_color(),
        )));
    }
    let response = ui.add(edit);
    if style.border_width > 0.0 {
        if let Some(border) = style.border_color {
            ui.painter().rect_stroke(
                response.rect,
                paint::corner_radius(style.corner_radius),
                egui::Stroke::new(style.border_width, paint::color32(border)),
                egui::StrokeKind::Outside,
            );
        }
    }
    if response.changed() {
        *entry.borrow_mut().text_mut() = text;
    }
}

fn themed_option_menu(ui: &mut egui::Ui, menu: &Rc<RefCell<OptionMenu>>) {
    let (values, selected_index, selected, style) = {
        let menu = menu.borrow();
        (
            menu.values().to_vec(),
            menu.selected_index(),
            menu.selected().unwrap_or_default().to_string(),
            menu.style().clone(),
        )
    };
    let mut pick = selected_index;
    ui.scope(|ui| {
        let visuals = ui.visuals_mut();
        if let Some(fill) = style.fg_color {
            visuals.widgets.inactive.weak_bg_fill = paint::color32(fill);
        }
        if let Some(hover) = style.button_hover_color {
            visuals.widgets.hovered.weak_bg_fill = paint::color32(hover);
        }
        egui::ComboBox::from_id_salt(ui.id().with("option-menu"))
            .selected_text(RichText::new(selected).color(paint::color32_or(
                style.text_color,
                ui.visuals().text_color(),
            )))
            .width(150.0)
            .show_ui(ui, |ui| {
                for (index, value) in values.iter().enumerate() {
                    ui.selectable_value(&mut pick, index, value);
                }
            });
    });
    if pick != selected_index {
        menu.borrow_mut().select(pick);
    }
}

fn themed_combo_box(ui: &mut egui::Ui, combo: &Rc<RefCell<ComboBox>>) {
    let (values, text, style) = {
        let combo = combo.borrow();
        (
            combo.values().to_vec(),
            combo.text().to_string(),
            combo.style().clone(),
        )
    };
    let mut pick = None;
    ui.scope(|ui| {
        let visuals = ui.visuals_mut();
        if let Some(fill) = style.fg_color {
            visuals.widgets.inactive.weak_bg_fill = paint::color32(fill);
        }
        if let Some(hover) = style.button_hover_color {
            visuals.widgets.hovered.weak_bg_fill = paint::color32(hover);
        }
        egui::ComboBox::from_id_salt(ui.id().with("combo-box"))
            .selected_text(RichText::new(text.clone()).color(paint::color32_or(
                style.text_color,
                ui.visuals().text_color(),
            )))
            .width(130.0)
            .show_ui(ui, |ui| {
                for (index, value) in values.iter().enumerate() {
                    if ui.selectable_label(*value == text, value).clicked() {
                        pick = Some(index);
                    }
                }
            });
    });
    if let Some(index) = pick {
        combo.borrow_mut().select(index);
    }
}

fn themed_checkbox(ui: &mut egui::Ui, checkbox: &Rc<RefCell<CheckBox>>) {
    let (text, mut checked, disabled, style) = {
        let checkbox = checkbox.borrow();
        (
            checkbox.text().to_string(),
            checkbox.checked(),
            checkbox.disabled(),
            checkbox.style().clone(),
        )
    };
    let text_color = if disabled {
        style.text_color_disabled.or(style.text_color)
    } else {
        style.text_color
    };
    let changed = ui
        .scope(|ui| {
            let visuals = ui.visuals_mut();
            if let Some(fill) = style.fg_color {
                visuals.selection.bg_fill = paint::color32(fill);
            }
            if let Some(mark) = style.checkmark_color {
                visuals.widgets.inactive.fg_stroke.color = paint::color32(mark);
                visuals.widgets.hovered.fg_stroke.color = paint::color32(mark);
            }
            let rich = RichText::new(text).color(paint::color32_or(
                text_color,
                ui.visuals().text_color(),
            ));
            ui.add_enabled(!disabled, egui::Checkbox::new(&mut checked, rich))
                .changed()
        })
        .inner;
    if changed {
        *checkbox.borrow_mut().checked_mut() = checked;
    }
}

fn themed_radio(ui: &mut egui::Ui, radio: &Rc<RefCell<RadioButton>>, selected: &mut i32) {
    let (text, value, style) = {
        let radio = radio.borrow();
        (
            radio.text().to_string(),
            radio.value(),
            radio.style().clone(),
        )
    };
    let rich = RichText::new(text).color(paint::color32_or(
        style.text_color,
        ui.visuals().text_color(),
    ));
    let response = ui
        .scope(|ui| {
            let visuals = ui.visuals_mut();
            if let Some(fill) = style.fg_color {
                visuals.selection.bg_fill = paint::color32(fill);
            }
            if let Some(border) = style.border_color {
                visuals.widgets.inactive.bg_stroke.color = paint::color32(border);
            }
            ui.radio(*selected == value, rich)
        })
        .inner;
    if response.clicked() {
        *selected = value;
    }
}

fn themed_progress(ui: &mut egui::Ui, bar: &Rc<RefCell<ProgressBar>>) {
    let (fraction, style) = {
        let bar = bar.borrow();
        (bar.fraction(), bar.style().clone())
    };
    ui.scope(|ui| {
        if let Some(track) = style.fg_color {
            ui.visuals_mut().extreme_bg_color = paint::color32(track);
        }
        ui.add(
            egui::ProgressBar::new(fraction)
                .fill(paint::color32_or(
                    style.progress_color,
                    ui.visuals().selection.bg_fill,
                ))
                .desired_width(160.0),
        );
    });
}

fn themed_slider(ui: &mut egui::Ui, slider: &Rc<RefCell<Slider>>) {
    let (min, max, mut value, style) = {
        let slider = slider.borrow();
        (
            slider.min(),
            slider.max(),
            slider.value(),
            slider.style().clone(),
        )
    };
    let changed = ui
        .scope(|ui| {
            let visuals = ui.visuals_mut();
            if let Some(track) = style.fg_color {
                visuals.widgets.inactive.bg_fill = paint::color32(track);
            }
            if let Some(progress) = style.progress_color {
                visuals.selection.bg_fill = paint::color32(progress);
            }
            if let Some(grab) = style.button_color {
                visuals.widgets.inactive.fg_stroke.color = paint::color32(grab);
            }
            if let Some(hover) = style.button_hover_color {
                visuals.widgets.hovered.fg_stroke.color = paint::color32(hover);
            }
            ui.horizontal(|ui| {
                let changed = ui
                    .add(
                        egui::Slider::new(&mut value, min..=max)
                            .show_value(false)
                            .trailing_fill(true),
                    )
                    .changed();
                ui.label(format!("{value:.0}"));
                changed
            })
            .inner
        })
        .inner;
    if changed {
        *slider.borrow_mut().value_mut() = value;
    }
}

fn themed_segmented(ui: &mut egui::Ui, segmented: &Rc<RefCell<SegmentedButton>>) {
    let (values, selected, style) = {
        let segmented = segmented.borrow();
        (
            segmented.values().to_vec(),
            segmented.selected_index(),
            segmented.style().clone(),
        )
    };
    let mut pick = selected;
    ui.horizontal(|ui| {
        for (index, value) in values.iter().enumerate() {
            let is_selected = index == selected;
            let fill = if is_selected {
                style.selected_color
            } else {
                style.unselected_color
            };
            let widget = egui::Button::new(RichText::new(value).color(paint::color32_or(
                style.text_color,
                ui.visuals().text_color(),
            )))
            .fill(paint::color32_or(fill, ui.visuals().widgets.inactive.bg_fill))
            .corner_radius(paint::corner_radius(style.corner_radius));
            if ui.add(widget).clicked() {
                pick = index;
            }
        }
    });
    if pick != selected {
        segmented.borrow_mut().select(pick);
    }
}

fn themed_textbox(
    ui: &mut egui::Ui,
    textbox: &Rc<RefCell<TextBox>>,
    scrollbar: &Rc<RefCell<Scrollbar>>,
) {
    let (mut text, read_only, style) = {
        let textbox = textbox.borrow();
        (
            textbox.text().to_string(),
            textbox.read_only(),
            textbox.style().clone(),
        )
    };
    let scrollbar_style = scrollbar.borrow().style().clone();
    let output = ui
        .scope(|ui| {
            let visuals = ui.visuals_mut();
            if let Some(grab) = style.scrollbar_button_color.or(scrollbar_style.button_color)
            {
                visuals.widgets.inactive.bg_fill = paint::color32(grab);
            }
            if let Some(hover) = style
                .scrollbar_button_hover_color
                .or(scrollbar_style.button_hover_color)
            {
                visuals.widgets.hovered.bg_fill = paint::color32(hover);
            }
            egui::ScrollArea::vertical()
                .max_height(90.0)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut text)
                            .interactive(!read_only)
                            .desired_width(f32::INFINITY)
                            .text_color(paint::color32_or(
                                style.text_color,
                                ui.visuals().text_color(),
                            ))
                            .background_color(paint::color32_or(
                                style.fg_color,
                                ui.visuals().extreme_bg_color,
                            )),
                    )
                    .changed()
                })
        })
        .inner;

    // Mirror the scroll position into the scrollbar widget.
    let scrollable = (output.content_size.y - output.inner_rect.height()).max(0.0);
    if scrollable > 0.0 {
        scrollbar
            .borrow_mut()
            .set_offset(output.state.offset.y / scrollable);
    }

    if output.inner && !read_only {
        *textbox.borrow_mut().text_mut() = text;
    }
}

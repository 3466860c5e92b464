use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::WidgetVisuals,
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Self { dark: Palette::dracula(), light: Palette::dracula_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        match ctx.style().visuals.dark_mode {
            true => &self.dark,
            false => &self.light,
        }
    }

    pub fn bold(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).strong().color(self.palette(ctx).emphasis)
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).danger
    }
}

#[derive(Clone)]
struct Palette {
    base: Color32,
    sunken: Color32,
    panel: Color32,
    raised: Color32,
    overlay: Color32,
    text: Color32,
    selection: Color32,
    accent: Color32,
    highlight: Color32,
    emphasis: Color32,
    danger: Color32,
}

impl Palette {
    //Colors from:
    //https://github.com/ShabbirHasan1/egui_dracula/blob/master/src/lib.rs
    fn dracula() -> Self {
        Self {
            base: Color32::from_rgb(0x28, 0x2a, 0x36),
            sunken: Color32::from_rgb(25, 26, 33),
            panel: Color32::from_rgb(33, 35, 53),
            raised: Color32::from_rgb(52, 54, 66),
            overlay: Color32::from_rgb(66, 69, 80),
            text: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            accent: Color32::from_rgb(189, 147, 249),
            highlight: Color32::from_rgb(139, 233, 253),
            emphasis: Color32::from_rgb(0xff, 0xb8, 0x6c),
            danger: Color32::from_rgb(0xff, 0x55, 0x55),
        }
    }

    fn dracula_light() -> Self {
        Self {
            base: Color32::from_rgb(248, 248, 242),
            sunken: Color32::from_rgb(235, 235, 230),
            panel: Color32::from_rgb(245, 245, 240),
            raised: Color32::from_rgb(255, 255, 250),
            overlay: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            accent: Color32::from_rgb(150, 120, 220),
            highlight: Color32::from_rgb(80, 190, 230),
            emphasis: Color32::from_rgb(220, 150, 90),
            danger: Color32::from_rgb(200, 80, 80),
        }
    }

    fn visuals(&self, dark: bool) -> Visuals {
        let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };

        let restyle = |w: &mut WidgetVisuals, fill: Color32, border: Color32| {
            w.bg_fill = fill;
            w.weak_bg_fill = self.overlay;
            w.bg_stroke = Stroke { color: border, ..w.bg_stroke };
            w.fg_stroke = Stroke { color: self.text, ..w.fg_stroke };
        };

        let widgets = &mut visuals.widgets;
        restyle(&mut widgets.noninteractive, self.base, self.panel);
        restyle(&mut widgets.inactive, self.raised, self.panel);
        restyle(&mut widgets.hovered, self.selection, self.highlight);
        restyle(&mut widgets.active, self.selection, self.highlight);
        restyle(&mut widgets.open, self.panel, self.accent);

        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke.color = self.text;
        visuals.hyperlink_color = self.highlight;
        visuals.faint_bg_color = if dark { self.sunken } else { self.raised };
        visuals.extreme_bg_color = self.sunken;
        visuals.code_bg_color = self.panel;
        visuals.error_fg_color = self.danger;
        visuals.warn_fg_color = self.emphasis;
        visuals.window_shadow = Shadow { color: self.sunken, ..visuals.window_shadow };
        visuals.window_fill = self.base;
        visuals.window_stroke.color = self.raised;
        visuals.panel_fill = self.panel;
        visuals.popup_shadow = Shadow { color: self.panel, ..visuals.popup_shadow };
        visuals
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    ctx.set_visuals_of(egui::Theme::Dark, theme.dark.visuals(true));
    ctx.set_visuals_of(egui::Theme::Light, theme.light.visuals(false));
}

use clap::Parser;
use std::path::PathBuf;
use ttyframe::{
    Align, BorderOption, Color, Edge, FrameOptions, FramePreset, Padding, Paint,
};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "ttyframe",
    about = "Draw a bordered text frame in the terminal",
    author,
    version
)]
pub(crate) struct Cli {
    /// Content lines; read from stdin when omitted and stdin is not a terminal
    pub(crate) content: Vec<String>,

    /// YAML or JSON file with frame options; flags override its values
    #[arg(long = "config", conflicts_with = "preset")]
    pub(crate) config: Option<PathBuf>,

    /// Message preset (info, warn, success, error)
    #[arg(long = "preset", value_enum)]
    pub(crate) preset: Option<FramePreset>,

    /// Row of the top edge (0-based); switches to cursor-positioned output
    #[arg(long = "top")]
    pub(crate) top: Option<u16>,

    /// Column of the left edge (0-based); switches to cursor-positioned output
    #[arg(long = "left")]
    pub(crate) left: Option<u16>,

    /// Total frame width including border and padding
    #[arg(long = "width")]
    pub(crate) width: Option<usize>,

    /// Total frame height including border and padding
    #[arg(long = "height")]
    pub(crate) height: Option<usize>,

    /// Content alignment (left, center, right)
    #[arg(long = "align", value_enum)]
    pub(crate) align: Option<Align>,

    /// Padding as 1 to 4 values, e.g. `1`, `1,2` or `1,2,1,2`
    #[arg(long = "padding")]
    pub(crate) padding: Option<Padding>,

    #[arg(long = "title-top-left")]
    pub(crate) title_top_left: Option<String>,

    #[arg(long = "title-top-center")]
    pub(crate) title_top_center: Option<String>,

    #[arg(long = "title-top-right")]
    pub(crate) title_top_right: Option<String>,

    #[arg(long = "title-bottom-left")]
    pub(crate) title_bottom_left: Option<String>,

    #[arg(long = "title-bottom-center")]
    pub(crate) title_bottom_center: Option<String>,

    #[arg(long = "title-bottom-right")]
    pub(crate) title_bottom_right: Option<String>,

    /// Border type (ascii, light, thick, round) or an inline JSON object
    #[arg(long = "border")]
    pub(crate) border: Option<BorderOption>,

    /// Hide the top edge
    #[arg(long = "no-top", default_value_t = false)]
    pub(crate) no_top: bool,

    /// Hide the bottom edge
    #[arg(long = "no-bottom", default_value_t = false)]
    pub(crate) no_bottom: bool,

    /// Hide the left edge
    #[arg(long = "no-left", default_value_t = false)]
    pub(crate) no_left: bool,

    /// Hide the right edge
    #[arg(long = "no-right", default_value_t = false)]
    pub(crate) no_right: bool,

    /// Content foreground color
    #[arg(long = "fg", value_enum)]
    pub(crate) fg: Option<Color>,

    /// Content background color
    #[arg(long = "bg", value_enum)]
    pub(crate) bg: Option<Color>,

    /// Border foreground color
    #[arg(long = "border-fg", value_enum)]
    pub(crate) border_fg: Option<Color>,

    /// Border background color
    #[arg(long = "border-bg", value_enum)]
    pub(crate) border_bg: Option<Color>,

    /// Disable all styling
    #[arg(long = "no-color", default_value_t = false)]
    pub(crate) no_color: bool,

    /// Write JSON trace logs to $TTYFRAME_TRACE_LOG or the temp dir
    /// ($TTYFRAME_TRACE_LEVEL picks the level, debug by default)
    #[arg(long = "logs", env = "TTYFRAME_LOGS", default_value_t = false)]
    pub(crate) logs: bool,

    /// Disable trace logs even when --logs is set
    #[arg(long = "no-logs", env = "TTYFRAME_NO_LOGS", default_value_t = false)]
    pub(crate) no_logs: bool,
}

impl Cli {
    /// Layer flags over `base`; only flags that were given replace a field.
    pub(crate) fn apply(&self, base: FrameOptions) -> FrameOptions {
        let mut options = base;
        if self.top.is_some() {
            options.top = self.top;
        }
        if self.left.is_some() {
            options.left = self.left;
        }
        if self.width.is_some() {
            options.width = self.width;
        }
        if self.height.is_some() {
            options.height = self.height;
        }
        if let Some(align) = self.align {
            options.align = align;
        }
        if let Some(padding) = self.padding {
            options.padding = padding;
        }

        let titles = [
            (&self.title_top_left, &mut options.title.top_left),
            (&self.title_top_center, &mut options.title.top_center),
            (&self.title_top_right, &mut options.title.top_right),
            (&self.title_bottom_left, &mut options.title.bottom_left),
            (&self.title_bottom_center, &mut options.title.bottom_center),
            (&self.title_bottom_right, &mut options.title.bottom_right),
        ];
        for (flag, slot) in titles {
            if let Some(title) = flag {
                slot.clone_from(title);
            }
        }

        if let Some(border) = self.border {
            options.border = border;
        }
        let hidden = [
            (self.no_top, Edge::Top),
            (self.no_bottom, Edge::Bottom),
            (self.no_left, Edge::Left),
            (self.no_right, Edge::Right),
        ];
        if hidden.iter().any(|(hide, _)| *hide) {
            let mut config = options.border.into_config();
            for (hide, edge) in hidden {
                if hide {
                    config = config.with_edge(edge, false);
                }
            }
            options.border = BorderOption::Custom(config);
        }

        if self.fg.is_some() {
            options.style.fg = self.fg;
        }
        if self.bg.is_some() {
            options.style.bg = self.bg;
        }
        if self.border_fg.is_some() || self.border_bg.is_some() {
            options.style.border = Paint::new(
                self.border_fg.or(options.style.border.fg),
                self.border_bg.or(options.style.border.bg),
            );
        }
        if self.no_color {
            options.enable_color = false;
        }
        options
    }
}

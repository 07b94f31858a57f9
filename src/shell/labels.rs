//! 界面文字

/// 界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 繁體中文
    #[default]
    ZhTw,
    /// English
    En,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::ZhTw => &ZH_TW,
            Locale::En => &EN,
        }
    }

    /// 是否需要 CJK 字体才能正确显示
    pub fn needs_cjk_font(self) -> bool {
        matches!(self, Locale::ZhTw)
    }

    /// 根据系统是否有 CJK 字体决定实际使用的语言，没有字体时退回英文
    pub fn resolve(self, cjk_font_available: bool) -> Locale {
        if self.needs_cjk_font() && !cjk_font_available {
            Locale::En
        } else {
            self
        }
    }
}

/// 一种语言下的全部界面文字
#[derive(Debug)]
pub struct Labels {
    pub locale: Locale,
    pub window_title: &'static str,
    pub public_ip_heading: &'static str,
    pub interfaces_heading: &'static str,
    pub refresh_button: &'static str,
    pub topmost_checkbox: &'static str,
    pub public_ip_loading: &'static str,
    pub status_initializing: &'static str,
    pub status_updating: &'static str,
    pub public_ip_failed: &'static str,
    pub no_interfaces: &'static str,
}

impl Labels {
    /// 刷新完成后的状态行
    pub fn status_completed(&self, time: &str, period_secs: u64) -> String {
        match self.locale {
            Locale::ZhTw => format!("最後更新: {time}（每 {period_secs} 秒自動刷新）"),
            Locale::En => format!("Last update: {time} (auto refresh every {period_secs}s)"),
        }
    }
}

static ZH_TW: Labels = Labels {
    locale: Locale::ZhTw,
    window_title: "IP 懸浮視窗",
    public_ip_heading: "目前出口 Public IP",
    interfaces_heading: "所有介面 IP（含 VPN）",
    refresh_button: "立即更新",
    topmost_checkbox: "置頂",
    public_ip_loading: "讀取中...",
    status_initializing: "初始化中...",
    status_updating: "更新中...",
    public_ip_failed: "讀取失敗",
    no_interfaces: "找不到可用的介面 IP。",
};

static EN: Labels = Labels {
    locale: Locale::En,
    window_title: "IP Floating Window",
    public_ip_heading: "Current public IP",
    interfaces_heading: "All interface IPs (incl. VPN)",
    refresh_button: "Refresh now",
    topmost_checkbox: "Keep on top",
    public_ip_loading: "Loading...",
    status_initializing: "Initializing...",
    status_updating: "Updating...",
    public_ip_failed: "Failed to read",
    no_interfaces: "No interface IPs found.",
};

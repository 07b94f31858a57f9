//! CJK 字体加载
//!
//! egui 自带字体不含中日韩字形，中文界面需要从系统字体目录加载一款 CJK 字体。

use anyhow::{Context, Result};
use eframe::egui;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const FONT_NAME: &str = "system-cjk";

/// 已读入内存的系统 CJK 字体
pub struct CjkFont {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

fn candidate_paths() -> Vec<PathBuf> {
    let candidates: &[&str] = if cfg!(windows) {
        &[
            "C:\\Windows\\Fonts\\msjh.ttc",
            "C:\\Windows\\Fonts\\mingliu.ttc",
            "C:\\Windows\\Fonts\\msyh.ttc",
            "C:\\Windows\\Fonts\\simsun.ttc",
        ]
    } else if cfg!(target_os = "macos") {
        &[
            "/System/Library/Fonts/PingFang.ttc",
            "/System/Library/Fonts/STHeiti Medium.ttc",
            "/Library/Fonts/Arial Unicode.ttf",
        ]
    } else {
        &[
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
            "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
        ]
    };

    candidates.iter().map(PathBuf::from).collect()
}

fn read_font(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read font file: {path:?}"))
}

/// 依次尝试平台常见字体路径，返回第一款可读的字体
pub fn load_cjk_font() -> Option<CjkFont> {
    for path in candidate_paths() {
        match read_font(&path) {
            Ok(bytes) => return Some(CjkFont { path, bytes }),
            Err(e) => debug!("{:#}", e),
        }
    }
    None
}

/// 把字体安装为比例字体与等宽字体的首选回退
pub fn install_cjk_font(ctx: &egui::Context, font: CjkFont) {
    info!("Using CJK font {:?}", font.path);
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_string(), egui::FontData::from_owned(font.bytes));

    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, FONT_NAME.to_string());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(FONT_NAME.to_string());

    ctx.set_fonts(fonts);
}

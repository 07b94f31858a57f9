//! 命令行界面定义
//!
//! 只提供 `--help` 与 `--version`，窗口行为没有任何命令行选项
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ipfloat")]
#[command(version)]
#[command(
    about = "Always-on-top window showing every interface IP and the current public IP, refreshed every 30 seconds"
)]
pub(crate) struct Cli {}

/// 发布版是 GUI 子系统程序，没有自己的控制台；从终端启动时挂到父进程的控制台上，
/// 让 `--help` / `--version` 的输出可见
#[cfg(windows)]
pub(crate) fn attach_parent_console() {
    use windows_sys::Win32::System::Console::{ATTACH_PARENT_PROCESS, AttachConsole};

    // 双击启动时没有父控制台，调用失败即可忽略
    unsafe {
        AttachConsole(ATTACH_PARENT_PROCESS);
    }
}

#[cfg(not(windows))]
pub(crate) fn attach_parent_console() {}

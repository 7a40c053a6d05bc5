//! システムフォント取得の Facade

use anyhow::Result;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
use crate::platform::os::linux;
#[cfg(target_os = "macos")]
use crate::platform::os::macos;
#[cfg(target_os = "windows")]
use crate::platform::os::windows;

/// OS ごとのシステムフォント候補を返す
#[allow(unreachable_code)]
pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    #[cfg(target_os = "windows")]
    {
        return windows::font::system_font_candidates();
    }
    #[cfg(target_os = "macos")]
    {
        return macos::font::system_font_candidates();
    }
    #[cfg(target_os = "linux")]
    {
        return linux::font::system_font_candidates();
    }

    anyhow::bail!("system font is not supported on this OS yet");
}

/// 候補のうち実在する最初のフォントパス
pub fn first_available_font() -> Option<PathBuf> {
    system_font_candidates()
        .ok()?
        .into_iter()
        .find(|p| p.exists())
}

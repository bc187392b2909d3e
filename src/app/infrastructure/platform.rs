use crate::app::domain::mode::SystemTheme;

/// Does the desktop environment ask for a light color scheme?
///
/// One static read; scheme changes while the app is running are not tracked.
/// When no probe gives an answer the result is `false`, so the caller lands
/// on dark mode.
pub fn detect_system_light_mode() -> bool {
    // Windows: Check registry for the apps theme preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 1;
            }
        }
    }

    // Linux: Ask gsettings, which covers GNOME and most GTK desktops
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            if output.status.success() {
                let scheme = String::from_utf8_lossy(&output.stdout);
                if scheme.contains("prefer-dark") {
                    return false;
                }
                // 'default' and 'prefer-light' both render light
                return true;
            }
        }

        // Older desktops only expose the theme name
        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            if output.status.success() {
                let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
                return !theme.contains("dark");
            }
        }
    }

    // macOS: AppleInterfaceStyle only exists while dark mode is on
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
                return !style.contains("dark");
            }
            return true;
        }
    }

    false
}

/// The desktop color scheme as seen through the `SystemTheme` port.
pub struct SystemColorScheme;

impl SystemTheme for SystemColorScheme {
    fn prefers_light(&self) -> bool {
        detect_system_light_mode()
    }
}

// site-shell — desktop entry point.
// Window and webview assembly live in lib.rs so the Android build can reach
// them through the mobile entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    site_shell::run()
}

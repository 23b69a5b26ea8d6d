
#[cfg(debug_assertions)]
pub fn get_supabase_url() -> &'static str {
    match option_env!("SUPABASE_URL") {
        Some(url) => url,
        None => "http://localhost:54321",  // Local supabase stack
    }
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("")
}

#[cfg(debug_assertions)]
pub fn get_supabase_anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("local-anon-key")
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}

// Wizard timing, in milliseconds
pub const OPTION_ADVANCE_DELAY_MS: u32 = 300;
pub const WIZARD_AUTO_CLOSE_MS: u32 = 3_000;
pub const CONTACT_STATUS_RESET_MS: u32 = 5_000;

// Scroll geometry, in pixels
pub const NAV_SCROLLED_THRESHOLD: f64 = 20.0;
pub const SCROLL_SPY_OFFSET: f64 = 100.0;
pub const SCROLL_TO_OFFSET: f64 = 80.0;

/// Fraction of an element that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

//! Request path construction for the REST endpoint set
//!
//! Pure functions mapping typed parameters to paths relative to the REST
//! namespace root. The client prepends the host; nothing here touches the
//! network. Paginated paths embed `start_index` then `length` positionally.

use crate::types::{AssetId, Page, Username};

/// Daily site-wide statistics
pub fn stats() -> String {
    "/stats".to_string()
}

/// Gameplay stats for a single creature
pub fn creature_stats(creature: &AssetId) -> String {
    format!("/creature/{creature}")
}

/// Profile data for a user
pub fn user_profile(username: &Username) -> String {
    format!("/user/{username}")
}

/// Assets created by a user
pub fn user_assets(username: &Username, page: Page) -> String {
    format!(
        "/assets/user/{username}/{}/{}",
        page.start_index, page.length
    )
}

/// Sporecasts a user is subscribed to
pub fn user_sporecasts(username: &Username) -> String {
    format!("/sporecasts/{username}")
}

/// Achievements unlocked by a user
pub fn user_achievements(username: &Username, page: Page) -> String {
    format!(
        "/assets/achievements/{username}/{}/{}",
        page.start_index, page.length
    )
}

/// Buddies of a user
pub fn user_buddies(username: &Username, page: Page) -> String {
    format!(
        "/users/buddies/{username}/{}/{}",
        page.start_index, page.length
    )
}

/// Users who list the given user as a buddy
pub fn user_subscribers(username: &Username, page: Page) -> String {
    format!(
        "/users/subscribers/{username}/{}/{}",
        page.start_index, page.length
    )
}

/// Assets collected in a sporecast
pub fn sporecast_assets(sporecast: &AssetId, page: Page) -> String {
    format!(
        "/assets/sporecast/{sporecast}/{}/{}",
        page.start_index, page.length
    )
}

/// Detail record for an asset
pub fn asset(asset: &AssetId) -> String {
    format!("/asset/{asset}")
}

/// Comments left on an asset
pub fn asset_comments(asset: &AssetId, page: Page) -> String {
    format!("/comments/{asset}/{}/{}", page.start_index, page.length)
}

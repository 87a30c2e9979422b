pub use super::game::Entity as Game;
pub use super::game_genre::Entity as GameGenre;
pub use super::game_team::Entity as GameTeam;
pub use super::genre::Entity as Genre;
pub use super::review::Entity as Review;
pub use super::role::Entity as Role;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
pub use super::user_liked_genre::Entity as UserLikedGenre;

mod game;
mod role;
mod user;

mod character;
mod planet;
mod user;

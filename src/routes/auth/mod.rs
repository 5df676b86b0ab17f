pub mod all;
pub mod login;
pub mod logout;
pub mod me;
pub mod register;
pub mod validate;

const PICTURE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

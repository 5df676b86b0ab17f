pub mod auth_session;
pub mod book;
pub mod comment;
pub mod movie;
pub mod note;
pub mod note_assignee;
pub mod scenario;
pub mod user;
pub mod user_role_film;

/*
 A movie is a workspace. Anyone signed in can create one and becomes its director (role 1).
 Everyone else gets access through user_role_film rows, one per role:
   1 director, 2 actor (with a character), 3 cinematographer, 4 set designer, 5 editor.
 Notes are filed under a category and addressed to specific people; comments hang off notes.
 */

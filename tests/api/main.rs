mod auth;
mod contact;
mod helpers;
mod partners_panel;
mod public_pages;

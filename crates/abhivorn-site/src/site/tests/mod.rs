mod common;
mod contact;
mod navigation;

//! HTTP handlers

pub mod health;
pub mod crud;
pub mod pages;
pub mod menus;
pub mod news;
pub mod site;
pub mod calculator;
pub mod rates;
pub mod upload;

mod settings;
mod support;

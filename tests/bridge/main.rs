mod uri;
mod window_commands;

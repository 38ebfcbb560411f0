mod image_commands;

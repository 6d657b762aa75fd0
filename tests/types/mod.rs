mod basic_error;
mod path_error;

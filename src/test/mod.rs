mod format;
mod yahoo;

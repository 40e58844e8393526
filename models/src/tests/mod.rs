mod frozen;
mod literals;
mod sequence;

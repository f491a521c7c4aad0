mod map;
mod score;
mod stat;

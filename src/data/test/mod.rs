mod match_day;
mod prediction;
mod user;

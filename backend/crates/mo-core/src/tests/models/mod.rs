mod identity;
mod token_kind;

mod bearer_token;

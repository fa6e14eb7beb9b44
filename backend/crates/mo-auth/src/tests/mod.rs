mod password_hasher;

pub async fn get_root() {}

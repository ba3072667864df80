mod test_domain;
mod test_normalizers;

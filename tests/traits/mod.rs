mod pair_ext;

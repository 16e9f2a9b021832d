pub mod solr_repository;

pub mod solr_repository_trait;

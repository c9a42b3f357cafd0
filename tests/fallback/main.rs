mod aligner;
